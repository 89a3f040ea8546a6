//! Tags command implementation
//!
//! Debug aid: shows what the extractor derives from a title, one tag per
//! line in the same lexicographic order the scorer iterates them.

use crate::assignment::extract_tags;
use crate::cli::TagsArgs;

/// Handle `triage tags` command
pub fn handle_tags(args: &TagsArgs) -> String {
    let tags = extract_tags(&args.title);
    if tags.is_empty() {
        "(no tags)".to_string()
    } else {
        tags.into_iter().collect::<Vec<_>>().join("\n")
    }
}
