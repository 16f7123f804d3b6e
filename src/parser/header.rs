//! Heuristic extraction of the student name and date range from the title line.
//! The title is expected to look like `**张三日规划（1.13 - 1.18）执行表**`, but
//! every part of it is optional and the extraction degrades gracefully.

use once_cell::sync::Lazy;
use regex::Regex;

/// Date-range notations recognized in the title line, tried in priority order.
/// The first matching pattern wins and the remaining ones are not consulted.
static DATE_RANGE_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        // M.D - M.D numeric form with a dot separator
        r"\d{1,2}\.\d{1,2}\s*[-–—]\s*\d{1,2}\.\d{1,2}",
        // M月D日 - M月D日 form, day suffix optional
        r"\d{1,2}月\d{1,2}日?\s*[-–—]\s*\d{1,2}月\d{1,2}日?",
        // Full YYYY年M月D日 - YYYY年M月D日 form
        r"\d{4}年\d{1,2}月\d{1,2}日\s*[-–—]\s*\d{4}年\d{1,2}月\d{1,2}日",
    ]
    .map(|pattern| Regex::new(pattern).expect("Hardcode regex pattern"))
});

/// Descriptive suffix words and parenthesis characters removed from name candidates
static NAME_NOISE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"日规划|执行表|周规划|规划|计划|[（()）]").expect("Hardcode regex pattern"));

/// Fields recovered from the title line; either may be empty
pub(crate) struct TitleFields {
    pub(crate) student_name: String,
    pub(crate) date_range: String,
}

/// Extracts the student name and date range from the first document line.
///
/// Structural markers (`#`, `**`) are stripped first. If one of the date-range
/// notations matches, the text preceding the match becomes the name candidate;
/// otherwise the whole line is searched for a CJK run. Absence of either field
/// is reported as an empty string, never as an error.
pub(crate) fn extract_title_fields(first_line: &str) -> TitleFields {
    let line = strip_markup(first_line);

    for pattern in DATE_RANGE_PATTERNS.iter() {
        if let Some(found) = pattern.find(&line) {
            let date_range = found.as_str().trim().to_owned();
            let student_name = clean_name(&line[..found.start()]);
            return TitleFields {
                student_name,
                date_range,
            };
        }
    }

    // No recognizable date range; fall back to a CJK run from the whole line
    let student_name = longest_cjk_run(&line)
        .map(|run| NAME_NOISE_PATTERN.replace_all(run, "").trim().to_owned())
        .unwrap_or_default();
    TitleFields {
        student_name,
        date_range: String::new(),
    }
}

/// Removes heading and emphasis markers from a title line
pub(crate) fn strip_markup(line: &str) -> String {
    line.replace('#', "").replace("**", "").trim().to_owned()
}

/// Cleans a raw name candidate taken from before the date range.
/// Suffix words and parentheses are removed; if the remainder contains CJK
/// text the longest contiguous run is kept, otherwise the cleaned text stands.
fn clean_name(candidate: &str) -> String {
    let cleaned = NAME_NOISE_PATTERN.replace_all(candidate.trim(), "");
    let cleaned = cleaned.trim();
    match longest_cjk_run(cleaned) {
        Some(run) => run.to_owned(),
        None => cleaned.to_owned(),
    }
}

/// Returns the longest contiguous run of CJK ideographs, earliest run winning ties
fn longest_cjk_run(text: &str) -> Option<&str> {
    let mut best: Option<(usize, usize)> = None;
    let mut current: Option<usize> = None;
    for (index, character) in text.char_indices() {
        if is_cjk(character) {
            current.get_or_insert(index);
        } else if let Some(start) = current.take() {
            if best.map(|(b, e)| e - b < index - start).unwrap_or(true) {
                best = Some((start, index));
            }
        }
    }
    if let Some(start) = current {
        if best.map(|(b, e)| e - b < text.len() - start).unwrap_or(true) {
            best = Some((start, text.len()));
        }
    }
    best.map(|(start, end)| &text[start..end])
}

/// Checks membership in the CJK Unified Ideographs block
fn is_cjk(character: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&character)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_name_and_dotted_date_range() {
        let fields = extract_title_fields("**张三日规划（1.13 - 1.18）执行表**");
        assert_eq!(fields.student_name, "张三");
        assert_eq!(fields.date_range, "1.13 - 1.18");
    }

    #[test]
    fn extracts_month_day_date_range() {
        let fields = extract_title_fields("# 李四周规划 1月13日 - 1月18日");
        assert_eq!(fields.student_name, "李四");
        assert_eq!(fields.date_range, "1月13日 - 1月18日");
    }

    #[test]
    fn extracts_full_year_date_range() {
        let fields = extract_title_fields("王五计划 2025年1月13日 - 2025年1月18日");
        assert_eq!(fields.student_name, "王五");
        assert_eq!(fields.date_range, "2025年1月13日 - 2025年1月18日");
    }

    #[test]
    fn first_matching_pattern_wins() {
        // Both the dotted and the 月日 notation appear; the dotted one has priority
        let fields = extract_title_fields("张三 1.13 - 1.18 又名 1月13日 - 1月18日");
        assert_eq!(fields.date_range, "1.13 - 1.18");
    }

    #[test]
    fn accepts_alternate_dash_characters() {
        let fields = extract_title_fields("张三日规划（1.13 – 1.18）执行表");
        assert_eq!(fields.date_range, "1.13 – 1.18");
    }

    #[test]
    fn keeps_non_cjk_name_when_date_matched() {
        let fields = extract_title_fields("**Amy 1.13 - 1.18**");
        assert_eq!(fields.student_name, "Amy");
        assert_eq!(fields.date_range, "1.13 - 1.18");
    }

    #[test]
    fn falls_back_to_cjk_run_without_date() {
        let fields = extract_title_fields("**张三日规划执行表**");
        assert_eq!(fields.student_name, "张三");
        assert_eq!(fields.date_range, "");
    }

    #[test]
    fn reports_absence_as_empty_fields() {
        let fields = extract_title_fields("Weekly Plan");
        assert_eq!(fields.student_name, "");
        assert_eq!(fields.date_range, "");
    }

    #[test]
    fn keeps_longest_cjk_run() {
        assert_eq!(longest_cjk_run("a张b欧阳锋c"), Some("欧阳锋"));
        assert_eq!(longest_cjk_run("abc"), None);
        assert_eq!(longest_cjk_run("张三丰"), Some("张三丰"));
    }
}
