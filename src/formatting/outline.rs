// src/formatting/outline.rs
//! Indented structural rendering of a block tree.
//!
//! Each block kind maps to a fixed textual pattern; indentation encodes
//! depth at four spaces per level. Rendering a block is a pure function of
//! `(block, depth)` — no state is carried between siblings beyond the
//! shared tree lookup.

use crate::constants::{CALLOUT_DEFAULT_ICON, CHARS_PER_BLOCK_ESTIMATE, INDENT_SPACES};
use crate::model::{plain_text, Block, BlockTree, Icon};

/// Renders the whole tree, depth 0 at the root's children.
pub fn render_outline(tree: &BlockTree) -> String {
    let mut out = String::with_capacity(tree.node_count() * CHARS_PER_BLOCK_ESTIMATE);
    render_children(tree, tree.root(), 0, &mut out);
    out
}

fn render_children(tree: &BlockTree, parent: &crate::types::PageRef, depth: usize, out: &mut String) {
    for block in tree.children_of(parent) {
        render_block(block, depth, out);
        // A block absent from the tree is a leaf regardless of its flag.
        if tree.contains(block.id()) {
            render_children(tree, block.id(), depth + 1, out);
        }
    }
}

/// Emits the structural fragment for one block at the given depth.
fn render_block(block: &Block, depth: usize, out: &mut String) {
    let indent = " ".repeat(INDENT_SPACES * depth);

    match block {
        Block::Paragraph(b) => {
            line(out, &indent, &plain_text(&b.content.rich_text));
            out.push('\n');
        }
        Block::Heading1(b) => heading(out, &indent, 1, &plain_text(&b.content.rich_text)),
        Block::Heading2(b) => heading(out, &indent, 2, &plain_text(&b.content.rich_text)),
        Block::Heading3(b) => heading(out, &indent, 3, &plain_text(&b.content.rich_text)),
        Block::BulletedListItem(b) => {
            line(out, &indent, &format!("- {}", plain_text(&b.content.rich_text)));
        }
        Block::NumberedListItem(b) => {
            // Literal "1." for every item regardless of position. Known
            // fixed-prefix behavior, preserved until an owner confirms
            // auto-incrementing is wanted.
            line(out, &indent, &format!("1. {}", plain_text(&b.content.rich_text)));
        }
        Block::ToDo(b) => {
            let checkbox = if b.checked { "[x]" } else { "[ ]" };
            line(
                out,
                &indent,
                &format!("- {} {}", checkbox, plain_text(&b.content.rich_text)),
            );
        }
        Block::Toggle(b) => {
            line(out, &indent, &format!("- {}", plain_text(&b.content.rich_text)));
        }
        Block::Quote(b) => {
            for text_line in plain_text(&b.content.rich_text).split('\n') {
                line(out, &indent, &format!("> {}", text_line));
            }
            out.push('\n');
        }
        Block::Callout(b) => {
            line(
                out,
                &indent,
                &format!("> {} {}", callout_icon(b.icon.as_ref()), plain_text(&b.content.rich_text)),
            );
            out.push('\n');
        }
        Block::Code(b) => {
            line(out, &indent, &format!("```{}", b.language));
            line(out, &indent, &plain_text(&b.content.rich_text));
            line(out, &indent, "```");
            out.push('\n');
        }
        Block::Image(b) => {
            line(out, &indent, &format!("![Image]({})", b.image.url()));
            out.push('\n');
        }
        Block::Divider(_) => {
            line(out, &indent, "---");
            out.push('\n');
        }
        Block::TableRow(b) => {
            let cells: Vec<String> = b.cells.iter().map(|cell| plain_text(cell)).collect();
            line(out, &indent, &format!("| {} |", cells.join(" | ")));
        }
        // Visual containers emit nothing; their children carry the content.
        Block::Table(_) | Block::ColumnList(_) | Block::Column(_) => {}
        Block::Unsupported(_) => {}
    }
}

fn line(out: &mut String, indent: &str, content: &str) {
    out.push_str(indent);
    out.push_str(content);
    out.push('\n');
}

fn heading(out: &mut String, indent: &str, level: usize, text: &str) {
    line(out, indent, &format!("{} {}", "#".repeat(level), text));
    out.push('\n');
}

fn callout_icon(icon: Option<&Icon>) -> &str {
    match icon {
        Some(Icon::Emoji { emoji }) => emoji,
        // Non-emoji icons (uploaded or external images) fall back too.
        _ => CALLOUT_DEFAULT_ICON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::blocks::*;
    use crate::model::RichTextItem;
    use crate::types::PageRef;
    use pretty_assertions::assert_eq;

    fn common(id: &str) -> BlockCommon {
        BlockCommon::new(PageRef::from_api(id))
    }

    fn common_with_children(id: &str) -> BlockCommon {
        BlockCommon::with_children(PageRef::from_api(id))
    }

    fn text(s: &str) -> TextBlockContent {
        TextBlockContent {
            rich_text: vec![RichTextItem::plain(s)],
        }
    }

    fn tree_with_roots(blocks: Vec<Block>) -> BlockTree {
        let mut tree = BlockTree::new(PageRef::from_api("root"));
        tree.insert(PageRef::from_api("root"), blocks);
        tree
    }

    #[test]
    fn headings_and_paragraphs_get_blank_lines() {
        let tree = tree_with_roots(vec![
            Block::Heading1(Heading1Block {
                common: common("h"),
                content: text("Title"),
            }),
            Block::Paragraph(ParagraphBlock {
                common: common("p"),
                content: text("Body"),
            }),
        ]);
        assert_eq!(render_outline(&tree), "# Title\n\nBody\n\n");
    }

    #[test]
    fn heading_levels_two_and_three() {
        let tree = tree_with_roots(vec![
            Block::Heading2(Heading2Block {
                common: common("h2"),
                content: text("Second"),
            }),
            Block::Heading3(Heading3Block {
                common: common("h3"),
                content: text("Third"),
            }),
        ]);
        assert_eq!(render_outline(&tree), "## Second\n\n### Third\n\n");
    }

    #[test]
    fn numbered_items_keep_the_literal_prefix() {
        let tree = tree_with_roots(vec![
            Block::NumberedListItem(NumberedListItemBlock {
                common: common("n1"),
                content: text("first"),
            }),
            Block::NumberedListItem(NumberedListItemBlock {
                common: common("n2"),
                content: text("second"),
            }),
        ]);
        assert_eq!(render_outline(&tree), "1. first\n1. second\n");
    }

    #[test]
    fn todo_renders_checkbox_state() {
        let tree = tree_with_roots(vec![
            Block::ToDo(ToDoBlock {
                common: common("t1"),
                content: text("open"),
                checked: false,
            }),
            Block::ToDo(ToDoBlock {
                common: common("t2"),
                content: text("done"),
                checked: true,
            }),
        ]);
        assert_eq!(render_outline(&tree), "- [ ] open\n- [x] done\n");
    }

    #[test]
    fn nested_children_indent_four_spaces_per_level() {
        let mut tree = BlockTree::new(PageRef::from_api("root"));
        tree.insert(
            PageRef::from_api("root"),
            vec![Block::BulletedListItem(BulletedListItemBlock {
                common: common_with_children("outer"),
                content: text("Item"),
            })],
        );
        tree.insert(
            PageRef::from_api("outer"),
            vec![Block::BulletedListItem(BulletedListItemBlock {
                common: common_with_children("inner"),
                content: text("Sub"),
            })],
        );
        tree.insert(
            PageRef::from_api("inner"),
            vec![Block::BulletedListItem(BulletedListItemBlock {
                common: common("innermost"),
                content: text("SubSub"),
            })],
        );
        assert_eq!(
            render_outline(&tree),
            "- Item\n    - Sub\n        - SubSub\n"
        );
    }

    #[test]
    fn flagged_but_unexpanded_child_is_treated_as_leaf() {
        // has_children is true but the tree holds no expansion; rendering
        // must not recurse (and must not panic).
        let tree = tree_with_roots(vec![Block::Toggle(ToggleBlock {
            common: common_with_children("t"),
            content: text("Collapsed"),
        })]);
        assert_eq!(render_outline(&tree), "- Collapsed\n");
    }

    #[test]
    fn quote_prefixes_every_line() {
        let tree = tree_with_roots(vec![Block::Quote(QuoteBlock {
            common: common("q"),
            content: text("line one\nline two"),
        })]);
        assert_eq!(render_outline(&tree), "> line one\n> line two\n\n");
    }

    #[test]
    fn callout_uses_emoji_or_default_icon() {
        let tree = tree_with_roots(vec![
            Block::Callout(CalloutBlock {
                common: common("c1"),
                icon: Some(Icon::Emoji {
                    emoji: "\u{26A0}".to_string(),
                }),
                content: text("Watch out"),
            }),
            Block::Callout(CalloutBlock {
                common: common("c2"),
                icon: None,
                content: text("Tip"),
            }),
            Block::Callout(CalloutBlock {
                common: common("c3"),
                icon: Some(Icon::External {
                    external: ExternalFile {
                        url: "https://icons.example/i.png".to_string(),
                    },
                }),
                content: text("Custom image icon"),
            }),
        ]);
        assert_eq!(
            render_outline(&tree),
            "> \u{26A0} Watch out\n\n> \u{1F4A1} Tip\n\n> \u{1F4A1} Custom image icon\n\n"
        );
    }

    #[test]
    fn code_block_fences_with_language() {
        let tree = tree_with_roots(vec![Block::Code(CodeBlock {
            common: common("k"),
            language: "rust".to_string(),
            content: text("fn main() {}"),
        })]);
        assert_eq!(render_outline(&tree), "```rust\nfn main() {}\n```\n\n");
    }

    #[test]
    fn image_renders_url_for_both_source_types() {
        let tree = tree_with_roots(vec![
            Block::Image(ImageBlock {
                common: common("i1"),
                image: FileObject::External {
                    external: ExternalFile {
                        url: "https://img.example/a.png".to_string(),
                    },
                },
            }),
            Block::Image(ImageBlock {
                common: common("i2"),
                image: FileObject::Hosted {
                    file: HostedFile {
                        url: "https://files.notion.so/b.png".to_string(),
                        expiry_time: None,
                    },
                },
            }),
        ]);
        assert_eq!(
            render_outline(&tree),
            "![Image](https://img.example/a.png)\n\n![Image](https://files.notion.so/b.png)\n\n"
        );
    }

    #[test]
    fn divider_renders_rule() {
        let tree = tree_with_roots(vec![Block::Divider(DividerBlock { common: common("d") })]);
        assert_eq!(render_outline(&tree), "---\n\n");
    }

    #[test]
    fn table_emits_nothing_but_rows_render_indented() {
        let mut tree = BlockTree::new(PageRef::from_api("root"));
        tree.insert(
            PageRef::from_api("root"),
            vec![Block::Table(TableBlock {
                common: common_with_children("tbl"),
                table_width: 2,
            })],
        );
        tree.insert(
            PageRef::from_api("tbl"),
            vec![Block::TableRow(TableRowBlock {
                common: common("row"),
                cells: vec![
                    vec![RichTextItem::plain("a")],
                    vec![RichTextItem::plain("b")],
                ],
            })],
        );
        assert_eq!(render_outline(&tree), "    | a | b |\n");
    }

    #[test]
    fn unsupported_kind_emits_nothing() {
        let tree = tree_with_roots(vec![Block::Unsupported(UnsupportedBlock {
            common: common("u"),
            block_type: "synced_block".to_string(),
        })]);
        assert_eq!(render_outline(&tree), "");
    }

    #[test]
    fn every_rendered_depth_has_exact_indent_width() {
        let mut tree = BlockTree::new(PageRef::from_api("root"));
        tree.insert(
            PageRef::from_api("root"),
            vec![Block::Paragraph(ParagraphBlock {
                common: common_with_children("p0"),
                content: text("zero"),
            })],
        );
        tree.insert(
            PageRef::from_api("p0"),
            vec![Block::Paragraph(ParagraphBlock {
                common: common_with_children("p1"),
                content: text("one"),
            })],
        );
        tree.insert(
            PageRef::from_api("p1"),
            vec![Block::Paragraph(ParagraphBlock {
                common: common("p2"),
                content: text("two"),
            })],
        );

        let rendered = render_outline(&tree);
        let content_lines: Vec<&str> =
            rendered.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(content_lines[0], "zero");
        assert_eq!(content_lines[1], "    one");
        assert_eq!(content_lines[2], "        two");
    }
}
