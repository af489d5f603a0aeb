//! Email composition: wrapping generated digest text in the fixed template.

use crate::base::types::{DigestKind, EmailMessage};

/// Fixed subject line per digest kind.
fn subject(kind: DigestKind) -> &'static str {
    match kind {
        DigestKind::DailyNews => "Your morning digest: yesterday's top business news",
        DigestKind::WeeklyTech => "Your weekly digest: this week's top tech news",
        DigestKind::DailyVocab => "Your morning digest: 10 business English words and idioms",
    }
}

/// Fixed introductory framing per digest kind.
fn intro(kind: DigestKind) -> &'static str {
    match kind {
        DigestKind::DailyNews => "Here is Gemini's summary of yesterday's major business news.",
        DigestKind::WeeklyTech => "Here is Gemini's summary of this week's major tech news.",
        DigestKind::DailyVocab => {
            "Today we bring you 10 C1-level business English words and idioms picked from yesterday's business news. Learning a little new vocabulary every day is a steady way to sharpen your business English."
        }
    }
}

/// Fill the email template with the generated digest text.
///
/// The body text is embedded verbatim, whatever it contains; composition never
/// validates or rewrites what the model produced.
pub fn compose(kind: DigestKind, body_text: &str, recipient_name: &str, recipient_email: &str) -> EmailMessage {
    let body = format!(
        "Hello {recipient_name},\n\n{intro}\n\n---\n\n{body_text}\n\n---\n\nWe hope you find this digest useful.\n\nBest regards,\nDigest Bot\n",
        intro = intro(kind),
    );

    EmailMessage {
        recipient: recipient_email.to_string(),
        subject: subject(kind).to_string(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_text_appears_verbatim() {
        let body_text = "1. Markets rallied.\n2. Chips are scarce.";
        let message = compose(DigestKind::DailyNews, body_text, "Reader", "reader@example.com");

        assert!(message.body.contains(body_text));
    }

    #[test]
    fn empty_body_text_is_accepted() {
        let message = compose(DigestKind::DailyVocab, "", "Reader", "reader@example.com");

        assert!(message.body.contains("Hello Reader,"));
        assert!(message.body.contains("---"));
    }

    #[test]
    fn each_kind_has_its_own_subject() {
        let subjects = [
            compose(DigestKind::DailyNews, "x", "R", "r@example.com").subject,
            compose(DigestKind::WeeklyTech, "x", "R", "r@example.com").subject,
            compose(DigestKind::DailyVocab, "x", "R", "r@example.com").subject,
        ];

        assert_ne!(subjects[0], subjects[1]);
        assert_ne!(subjects[1], subjects[2]);
        assert_ne!(subjects[0], subjects[2]);
    }

    #[test]
    fn recipient_and_greeting_come_from_the_arguments() {
        let message = compose(DigestKind::WeeklyTech, "body", "Ei-chan", "ei@example.com");

        assert_eq!(message.recipient, "ei@example.com");
        assert!(message.body.starts_with("Hello Ei-chan,"));
    }
}
