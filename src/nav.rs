//! Fixed navigation table for the sidebar.
//!
//! This is configuration, not derived data: the links, their targets and
//! glyphs are compiled in. Matching rules: the dashboard root link is active
//! only on exact path equality (so it does not light up for its siblings);
//! every other link and every category matches by path prefix, longest
//! prefix winning if prefixes ever overlap.

#[derive(Debug, PartialEq, Eq)]
pub struct ToolLink {
    pub label: &'static str,
    pub path: &'static str,
    pub glyph: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Category {
    pub label: &'static str,
    pub prefix: &'static str,
    pub tools: &'static [ToolLink],
}

pub const DASHBOARD_PATH: &str = "/dashboard";

/// Workspace links shown above the tool categories.
pub const LIBRARY: &[ToolLink] = &[
    ToolLink {
        label: "Recent Files",
        path: "/dashboard",
        glyph: "🕘",
    },
    ToolLink {
        label: "Shared Files",
        path: "/dashboard/shared",
        glyph: "🤝",
    },
    ToolLink {
        label: "Tags",
        path: "/dashboard/tags",
        glyph: "🏷",
    },
];

/// Top-level tool categories and their sub-navigation.
pub const CATEGORIES: &[Category] = &[
    Category {
        label: "Marketing",
        prefix: "/tools/marketing",
        tools: &[
            ToolLink {
                label: "Ad Copy",
                path: "/tools/marketing/ad-copy",
                glyph: "📣",
            },
            ToolLink {
                label: "Blog Writer",
                path: "/tools/marketing/blog-writer",
                glyph: "✍",
            },
            ToolLink {
                label: "Social Posts",
                path: "/tools/marketing/social-posts",
                glyph: "💬",
            },
        ],
    },
    Category {
        label: "Cloud Dev",
        prefix: "/tools/cloud-dev",
        tools: &[
            ToolLink {
                label: "Code Review",
                path: "/tools/cloud-dev/code-review",
                glyph: "🔍",
            },
            ToolLink {
                label: "API Builder",
                path: "/tools/cloud-dev/api-builder",
                glyph: "🧩",
            },
            ToolLink {
                label: "Deploy Agent",
                path: "/tools/cloud-dev/deploy-agent",
                glyph: "🚀",
            },
        ],
    },
    Category {
        label: "Research",
        prefix: "/tools/research",
        tools: &[
            ToolLink {
                label: "Summarizer",
                path: "/tools/research/summarizer",
                glyph: "📄",
            },
            ToolLink {
                label: "Citation Finder",
                path: "/tools/research/citation-finder",
                glyph: "📚",
            },
        ],
    },
];

/// Whether a sidebar link should be highlighted for the current path.
pub fn is_link_active(current_path: &str, target: &str) -> bool {
    if target == DASHBOARD_PATH {
        current_path == target
    } else {
        current_path.starts_with(target)
    }
}

/// The category owning the current path, if any. Longest prefix wins.
pub fn active_category(current_path: &str) -> Option<&'static Category> {
    best_prefix_match(CATEGORIES, current_path)
}

fn best_prefix_match<'a>(categories: &'a [Category], path: &str) -> Option<&'a Category> {
    categories
        .iter()
        .filter(|c| path.starts_with(c.prefix))
        .max_by_key(|c| c.prefix.len())
}

/// Find a tool entry by its full path.
pub fn tool_by_path(path: &str) -> Option<&'static ToolLink> {
    CATEGORIES
        .iter()
        .flat_map(|c| c.tools.iter())
        .find(|t| t.path == path)
}

/// Fallback title for slugs with no table entry: "ad-copy" → "Ad Copy".
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marketing_is_the_only_active_category_for_a_marketing_tool() {
        let active = active_category("/tools/marketing/ad-copy").unwrap();
        assert_eq!(active.label, "Marketing");

        let others: Vec<_> = CATEGORIES
            .iter()
            .filter(|c| c.label != "Marketing")
            .filter(|c| "/tools/marketing/ad-copy".starts_with(c.prefix))
            .collect();
        assert!(others.is_empty());
    }

    #[test]
    fn no_category_is_active_on_the_dashboard() {
        assert!(active_category("/dashboard").is_none());
        assert!(active_category("/").is_none());
    }

    #[test]
    fn dashboard_root_link_requires_exact_match() {
        assert!(is_link_active("/dashboard", "/dashboard"));
        assert!(!is_link_active("/dashboard/shared", "/dashboard"));
        assert!(!is_link_active("/dashboard/tags", "/dashboard"));
    }

    #[test]
    fn other_links_match_by_prefix() {
        assert!(is_link_active("/dashboard/shared", "/dashboard/shared"));
        assert!(is_link_active(
            "/tools/marketing/ad-copy",
            "/tools/marketing/ad-copy"
        ));
        assert!(!is_link_active("/tools/marketing/ad-copy", "/tools/research"));
    }

    #[test]
    fn longest_prefix_wins_when_prefixes_overlap() {
        // The shipped table has no overlapping prefixes; this pins the
        // tie-break rule with a synthetic fixture.
        let fixture = [
            Category {
                label: "Tools",
                prefix: "/tools",
                tools: &[],
            },
            Category {
                label: "Marketing",
                prefix: "/tools/marketing",
                tools: &[],
            },
        ];
        let best = best_prefix_match(&fixture, "/tools/marketing/ad-copy").unwrap();
        assert_eq!(best.label, "Marketing");
    }

    #[test]
    fn shipped_prefixes_do_not_overlap() {
        for a in CATEGORIES {
            for b in CATEGORIES {
                if a.prefix != b.prefix {
                    assert!(!a.prefix.starts_with(b.prefix));
                }
            }
        }
    }

    #[test]
    fn tool_lookup_by_path() {
        let tool = tool_by_path("/tools/cloud-dev/code-review").unwrap();
        assert_eq!(tool.label, "Code Review");
        assert!(tool_by_path("/tools/cloud-dev/missing").is_none());
    }

    #[test]
    fn slug_titles_are_humanized() {
        assert_eq!(title_from_slug("ad-copy"), "Ad Copy");
        assert_eq!(title_from_slug("summarizer"), "Summarizer");
        assert_eq!(title_from_slug(""), "");
    }
}
