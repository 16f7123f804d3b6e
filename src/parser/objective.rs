//! Extraction of the weekly objective text from the document lines.

use crate::parser::header::strip_markup;
use once_cell::sync::Lazy;
use regex::Regex;

/// Label variants preceding the objective text, longest variant first
static OBJECTIVE_LABEL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(本周核心目标|核心目标|本周目标)[：:]").expect("Hardcode regex pattern"));

/// Candidates shorter than this may continue on the following line
const CONTINUATION_THRESHOLD: usize = 20;

/// Scans the lines for the first objective marker and collects its text.
///
/// The objective may spill into the following line when the marker line itself
/// is short; a following line that already belongs to the table (contains a
/// pipe) is never consumed. Returns an empty string when no marker exists.
pub(crate) fn extract_objective(lines: &[&str]) -> String {
    let mut text = String::new();
    for (index, line) in lines.iter().enumerate() {
        if !line.contains("核心目标") && !line.contains("本周目标") {
            continue;
        }
        let stripped = line.replace("**", "");
        text = OBJECTIVE_LABEL_PATTERN.replace_all(&stripped, "").trim().to_owned();
        if text.chars().count() < CONTINUATION_THRESHOLD {
            if let Some(next) = lines.get(index + 1) {
                if !next.contains('|') {
                    text.push(' ');
                    text.push_str(strip_markup(next).trim());
                }
            }
        }
        break;
    }

    // Collapse internal whitespace runs to single spaces
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
