use std::io::{self, Write};

use colored::Colorize;

use crate::models::{NodeId, ScanTotals, Tree};
use crate::size::format_size;

/// Decorates entry names before they are written.
pub trait EntryStyle {
    fn directory(&self, name: &str) -> String;
    fn file(&self, name: &str) -> String;
}

/// Names as-is.
pub struct PlainStyle;

impl EntryStyle for PlainStyle {
    fn directory(&self, name: &str) -> String {
        name.to_owned()
    }

    fn file(&self, name: &str) -> String {
        name.to_owned()
    }
}

/// ANSI colors: blue directories, red files.
pub struct ColorStyle;

impl EntryStyle for ColorStyle {
    fn directory(&self, name: &str) -> String {
        name.blue().to_string()
    }

    fn file(&self, name: &str) -> String {
        name.red().to_string()
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Print an indent-only line after a childless last sibling.
    pub spacer_lines: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { spacer_lines: true }
    }
}

pub fn write_tree<W: Write + ?Sized>(
    writer: &mut W,
    tree: &Tree,
    style: &dyn EntryStyle,
    options: &RenderOptions,
) -> io::Result<()> {
    let root = tree.root();
    writeln!(writer, "{}", style.directory(&root.name))?;
    write_children(writer, tree, tree.root_id(), "", style, options)
}

fn write_children<W: Write + ?Sized>(
    writer: &mut W,
    tree: &Tree,
    parent: NodeId,
    indent: &str,
    style: &dyn EntryStyle,
    options: &RenderOptions,
) -> io::Result<()> {
    for &id in &tree.node(parent).children {
        let node = tree.node(id);
        let connector = if node.is_last_sibling { "└──" } else { "├──" };
        let name = if node.is_dir() {
            style.directory(&node.name)
        } else {
            style.file(&node.name)
        };
        writeln!(writer, "{indent}  {connector}{name}")?;

        if node.children.is_empty() {
            if node.is_last_sibling && options.spacer_lines {
                writeln!(writer, "{indent}")?;
            }
            continue;
        }

        let continuation = if node.is_last_sibling { "  " } else { "  │ " };
        let child_indent = format!("{indent}{continuation}");
        write_children(writer, tree, id, &child_indent, style, options)?;
    }

    Ok(())
}

pub fn write_summary<W: Write + ?Sized>(writer: &mut W, totals: &ScanTotals) -> io::Result<()> {
    writeln!(
        writer,
        "{} directories, {} files. Total size: {}",
        totals.directories,
        totals.files,
        format_size(totals.bytes)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, NewNode};
    use std::path::{Path, PathBuf};

    fn add(tree: &mut Tree, parent: &str, name: &str, kind: EntryKind, last: bool) {
        let path = PathBuf::from(parent).join(name);
        tree.insert(
            Path::new(parent),
            NewNode {
                name: name.to_owned(),
                path,
                kind,
                size_bytes: 0,
                is_last_sibling: last,
            },
        )
        .unwrap();
    }

    fn render(tree: &Tree, options: &RenderOptions) -> String {
        let mut out = Vec::new();
        write_tree(&mut out, tree, &PlainStyle, options).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample_tree(sub_first: bool) -> Tree {
        let mut tree = Tree::new("/root", "root", EntryKind::Directory);
        if sub_first {
            add(&mut tree, "/root", "sub", EntryKind::Directory, false);
            add(&mut tree, "/root/sub", "c.txt", EntryKind::File, true);
            add(&mut tree, "/root", "a.txt", EntryKind::File, false);
            add(&mut tree, "/root", "b.txt", EntryKind::File, true);
        } else {
            add(&mut tree, "/root", "a.txt", EntryKind::File, false);
            add(&mut tree, "/root", "b.txt", EntryKind::File, false);
            add(&mut tree, "/root", "sub", EntryKind::Directory, true);
            add(&mut tree, "/root/sub", "c.txt", EntryKind::File, true);
        }
        tree
    }

    #[test]
    fn last_directory_drops_the_continuation_bar() {
        let out = render(&sample_tree(false), &RenderOptions::default());
        assert_eq!(
            out,
            concat!(
                "root\n",
                "  ├──a.txt\n",
                "  ├──b.txt\n",
                "  └──sub\n",
                "    └──c.txt\n",
                "  \n",
            )
        );
    }

    #[test]
    fn inner_directory_keeps_the_continuation_bar() {
        let out = render(&sample_tree(true), &RenderOptions::default());
        assert_eq!(
            out,
            concat!(
                "root\n",
                "  ├──sub\n",
                "  │   └──c.txt\n",
                "  │ \n",
                "  ├──a.txt\n",
                "  └──b.txt\n",
                "\n",
            )
        );
    }

    #[test]
    fn spacer_lines_can_be_disabled() {
        let options = RenderOptions {
            spacer_lines: false,
        };
        let out = render(&sample_tree(true), &options);
        assert_eq!(
            out,
            concat!(
                "root\n",
                "  ├──sub\n",
                "  │   └──c.txt\n",
                "  ├──a.txt\n",
                "  └──b.txt\n",
            )
        );
    }

    #[test]
    fn empty_last_directory_gets_a_spacer() {
        let mut tree = Tree::new("/root", "root", EntryKind::Directory);
        add(&mut tree, "/root", "empty", EntryKind::Directory, true);

        let out = render(&tree, &RenderOptions::default());
        assert_eq!(out, "root\n  └──empty\n\n");
    }

    #[test]
    fn one_line_per_node_plus_spacers() {
        let tree = sample_tree(true);
        let out = render(&tree, &RenderOptions::default());
        let spacers = out
            .lines()
            .filter(|line| matches!(line.trim(), "" | "│"))
            .count();
        assert_eq!(out.lines().count(), tree.len() + spacers);
        assert_eq!(spacers, 2);
    }

    #[test]
    fn root_is_styled_as_directory_even_when_a_file() {
        struct Tagged;
        impl EntryStyle for Tagged {
            fn directory(&self, name: &str) -> String {
                format!("[d]{name}")
            }
            fn file(&self, name: &str) -> String {
                format!("[f]{name}")
            }
        }

        let tree = Tree::new("/notes.txt", "notes.txt", EntryKind::File);
        let mut out = Vec::new();
        write_tree(&mut out, &tree, &Tagged, &RenderOptions::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[d]notes.txt\n");

        let mut out = Vec::new();
        write_tree(&mut out, &sample_tree(false), &Tagged, &RenderOptions::default()).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("├──[f]a.txt"));
        assert!(out.contains("└──[d]sub"));
    }

    #[test]
    fn color_style_wraps_names_in_escape_codes() {
        colored::control::set_override(true);
        assert!(ColorStyle.directory("dir").contains("\u{1b}[34m"));
        assert!(ColorStyle.file("file").contains("\u{1b}[31m"));
    }

    #[test]
    fn summary_line_uses_human_size() {
        let totals = ScanTotals {
            directories: 1,
            files: 3,
            bytes: 35,
        };
        let mut out = Vec::new();
        write_summary(&mut out, &totals).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1 directories, 3 files. Total size: 35 B\n"
        );
    }
}
