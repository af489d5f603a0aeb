//! Prompt templates and date-window arithmetic for digest generation.
//!
//! Everything here is pure: the same `(kind, reference_date)` pair always
//! produces byte-identical output, so prompt content is fully testable
//! without touching the network.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::types::DigestKind;

/// Build the full natural-language prompt for one digest run.
pub fn build_prompt(kind: DigestKind, reference_date: NaiveDate) -> String {
    match kind {
        DigestKind::DailyNews => daily_news_prompt(reference_date),
        DigestKind::WeeklyTech => weekly_tech_prompt(reference_date),
        DigestKind::DailyVocab => daily_vocab_prompt(reference_date),
    }
}

/// The day the daily digests report on: the day before the reference date.
pub fn operative_date(reference_date: NaiveDate) -> NaiveDate {
    reference_date - Duration::days(1)
}

/// The 7-day window the weekly tech digest reports on.
///
/// The window runs from the Saturday before last up to the day before the
/// reference date. When the scheduler fires on a Saturday (the intended
/// cadence) that is exactly the previous Saturday through Friday; on any
/// other weekday the window is still well-defined, anchored to the most
/// recent Saturday.
pub fn weekly_window(reference_date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let days_since_saturday = (reference_date.weekday().num_days_from_sunday() + 1) % 7;
    let start = reference_date - Duration::days(i64::from(days_since_saturday) + 7);
    let end = reference_date - Duration::days(1);

    (start, end)
}

/// True when the reference date matches the weekly digest's intended cadence.
pub fn is_weekly_cadence(reference_date: NaiveDate) -> bool {
    reference_date.weekday() == Weekday::Sat
}

/// Calendar-date rendering used inside every prompt, e.g. `June 7, 2024`.
fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn daily_news_prompt(reference_date: NaiveDate) -> String {
    let date = format_date(operative_date(reference_date));

    format!(
        r#"You are an AI assistant specializing in business news.
Collect the major business news of {date} and summarize it concisely under the following requirements.

* **Period covered:** the major business news of {date}, focusing on the Japanese, US, and European markets.
* **Categories:** finance, IT, technology, manufacturing, the international economy, M&A, and new products and services.
* **Output format:**
    * Plain, readable text.
    * For each story: its title, a concise summary of about 3 lines, and its main impact (on business, on markets, and so on).
    * Cover at most 5 major stories in detail, and wrap up the remaining notable news as brief bullet points.
* **Tone:** objective and analytical.
* **Other:** avoid heavy jargon so a businessperson can absorb the digest in a few morning minutes. Source URLs are not needed.
"#
    )
}

fn weekly_tech_prompt(reference_date: NaiveDate) -> String {
    let (start, end) = weekly_window(reference_date);
    let range = format!("{} through {}", format_date(start), format_date(end));

    format!(
        r#"You are an AI assistant specializing in technology news.
Collect the major tech news of {range} and summarize it concisely under the following requirements.

* **Period covered:** the major tech news of {range}, covering worldwide trends with particular focus on Japan, the US, and Europe.
* **Categories:** AI, semiconductors, cloud, cybersecurity, Web3, XR/metaverse, space, cleantech, consumer electronics, startup funding, and regulation.
* **Output format:**
    * Narrow the week down to 3 to 5 major topics, and for each one provide:
    * the topic's title,
    * a concise summary of about 5 lines,
    * and its effect on the week's trends, the market, and society.
    * Wrap up any other news worth noting as a few bullet points.
* **Tone:** objective, analytical, and forward-looking.
* **Other:** avoid heavy jargon so a businessperson can catch up over the weekend in a few minutes. Source URLs are not needed.
"#
    )
}

fn daily_vocab_prompt(reference_date: NaiveDate) -> String {
    let date = format_date(operative_date(reference_date));

    format!(
        r#"You are an AI instructor for English learners.
Generate 10 C1-level business English words and idioms by following these steps.

**Steps:**
1.  Pick one major business news story of {date} (especially from the Japanese, US, or European markets, finance, technology, or the economy at large).
2.  Write a short overview of the story in 1 to 2 sentences.
3.  Select 10 C1-level words and idioms that appeared in the story, or that frequently appear in business contexts related to it.
4.  For each word or idiom, provide:

    * **Word/idiom:**
    * **Meaning:** (concise)
    * **Example from the news:** (a sentence in which the word or idiom could plausibly have appeared in the story, written to read like a real news quotation)
    * **Usage in business:** (one concrete example of how to use it in a meeting, an email, or a presentation)

**Output format notes:**
* Present the words as a numbered list with blank lines between entries for readability.
* Keep the overall tone professional and educational.
* Draw from varied stories and contexts so a different set of words comes up every day.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::types::DigestKind;

    fn saturday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 8).unwrap()
    }

    #[test]
    fn build_prompt_is_pure() {
        for kind in [DigestKind::DailyNews, DigestKind::WeeklyTech, DigestKind::DailyVocab] {
            let first = build_prompt(kind, saturday());
            let second = build_prompt(kind, saturday());

            assert_eq!(first, second);
        }
    }

    #[test]
    fn weekly_window_for_a_saturday_covers_the_previous_week() {
        let (start, end) = weekly_window(saturday());

        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 6, 7).unwrap());
    }

    #[test]
    fn weekly_window_is_anchored_to_a_saturday() {
        let mut date = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();

        for _ in 0..7 {
            let (start, end) = weekly_window(date);

            assert_eq!(end, date - Duration::days(1));
            assert_eq!(start.weekday(), Weekday::Sat);
            assert!(start < end);

            date = date + Duration::days(1);
        }
    }

    #[test]
    fn weekly_prompt_embeds_the_window_bounds() {
        let prompt = build_prompt(DigestKind::WeeklyTech, saturday());

        assert!(prompt.contains("June 1, 2024"));
        assert!(prompt.contains("June 7, 2024"));
    }

    #[test]
    fn daily_news_prompt_references_yesterday() {
        let prompt = build_prompt(DigestKind::DailyNews, saturday());

        assert!(prompt.contains("June 7, 2024"));
        assert!(!prompt.contains("June 8, 2024"));
    }

    #[test]
    fn daily_vocab_prompt_references_yesterday() {
        let prompt = build_prompt(DigestKind::DailyVocab, saturday());

        assert!(prompt.contains("June 7, 2024"));
        assert!(prompt.contains("10 C1-level"));
    }

    #[test]
    fn saturday_matches_the_weekly_cadence() {
        assert!(is_weekly_cadence(saturday()));
        assert!(!is_weekly_cadence(saturday() + Duration::days(1)));
    }
}
