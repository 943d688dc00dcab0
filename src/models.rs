use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Unverified,
    Submitted,
    Verified,
}

impl VerificationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Unverified => "Unverified",
            Self::Submitted => "Awaiting review",
            Self::Verified => "Verified",
        }
    }

    pub fn as_query(self) -> &'static str {
        match self {
            Self::Unverified => "unverified",
            Self::Submitted => "submitted",
            Self::Verified => "verified",
        }
    }

    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "unverified" => Some(Self::Unverified),
            "submitted" => Some(Self::Submitted),
            "verified" => Some(Self::Verified),
            _ => None,
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Unverified => "bg-slate-100 text-slate-600 px-2.5 py-1 rounded-full text-[10px] font-bold",
            Self::Submitted => "bg-amber-100 text-amber-700 px-2.5 py-1 rounded-full text-[10px] font-bold",
            Self::Verified => "bg-green-100 text-green-700 px-2.5 py-1 rounded-full text-[10px] font-bold",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelLinkStatus {
    NotLinked,
    Submitted,
    Linked,
}

impl ChannelLinkStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::NotLinked => "Not linked",
            Self::Submitted => "Awaiting review",
            Self::Linked => "Linked",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::NotLinked => "bg-slate-100 text-slate-600 px-2.5 py-1 rounded-full text-[10px] font-bold",
            Self::Submitted => "bg-amber-100 text-amber-700 px-2.5 py-1 rounded-full text-[10px] font-bold",
            Self::Linked => "bg-green-100 text-green-700 px-2.5 py-1 rounded-full text-[10px] font-bold",
        }
    }
}

/// Server-computed earnings figures, in cents.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct EarningsSnapshot {
    pub total: i64,
    pub this_month: i64,
    pub pending: i64,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub verification: VerificationStatus,
    pub channel_link: ChannelLinkStatus,
    pub earnings: EarningsSnapshot,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Declined,
}

impl SubmissionStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Declined => "Declined",
        }
    }

    pub fn as_query(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Declined => "declined",
        }
    }

    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "declined" => Some(Self::Declined),
            _ => None,
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "bg-amber-100 text-amber-700 px-2.5 py-1 rounded-full text-[10px] font-bold",
            Self::Approved => "bg-green-100 text-green-700 px-2.5 py-1 rounded-full text-[10px] font-bold",
            Self::Declined => "bg-red-100 text-red-700 px-2.5 py-1 rounded-full text-[10px] font-bold",
        }
    }
}

/// A claimed monthly income figure with a proof image. Once reviewed the
/// status is terminal; the server rejects any further transition.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ManualIncomeSubmission {
    pub id: String,
    pub user_email: String,
    pub month: String,
    pub amount: i64,
    pub proof_url: String,
    pub status: SubmissionStatus,
    pub submitted_at: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReviewDecision {
    Approve,
    Decline,
}

impl ReviewDecision {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Decline => "decline",
        }
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Approve => "approved",
            Self::Decline => "declined",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    Answered,
    Closed,
}

impl TicketStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Answered => "Answered",
            Self::Closed => "Closed",
        }
    }

    pub fn as_query(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Answered => "answered",
            Self::Closed => "closed",
        }
    }

    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "open" => Some(Self::Open),
            "answered" => Some(Self::Answered),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Open => "bg-amber-100 text-amber-700 px-2.5 py-1 rounded-full text-[10px] font-bold",
            Self::Answered => "bg-blue-100 text-blue-700 px-2.5 py-1 rounded-full text-[10px] font-bold",
            Self::Closed => "bg-slate-100 text-slate-600 px-2.5 py-1 rounded-full text-[10px] font-bold",
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TicketReply {
    pub author: String,
    pub staff: bool,
    pub body: String,
    pub sent_at: String,
}

/// Replies are append-only and arrive in insertion order.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SupportTicket {
    pub id: String,
    pub user_email: String,
    pub subject: String,
    pub status: TicketStatus,
    pub opened_at: String,
    pub replies: Vec<TicketReply>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct NonCompliantUser {
    pub email: String,
    pub missed: u32,
}

/// A daily unit of work distribution. `completion_rate` is a 0..1 fraction
/// and the non-compliant set is computed server-side; nothing here is
/// mutable from the dashboard.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AssignmentBatch {
    pub id: String,
    pub date: String,
    pub assigned: u32,
    pub completed: u32,
    pub completion_rate: f64,
    pub non_compliant: Vec<NonCompliantUser>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AiVideo {
    pub id: Option<String>,
    pub title: String,
    pub url: String,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TutorialItem {
    pub id: Option<String>,
    pub title: String,
    pub url: String,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: Option<String>,
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReportKind {
    Earnings,
    Payouts,
    Signups,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [Self::Earnings, Self::Payouts, Self::Signups];

    pub fn label(self) -> &'static str {
        match self {
            Self::Earnings => "Earnings report",
            Self::Payouts => "Payouts report",
            Self::Signups => "Signups report",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Earnings => "Per-user earnings for the current month.",
            Self::Payouts => "Completed and pending payout runs.",
            Self::Signups => "New registrations and referral sources.",
        }
    }

    pub fn as_path(self) -> &'static str {
        match self {
            Self::Earnings => "earnings",
            Self::Payouts => "payouts",
            Self::Signups => "signups",
        }
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ReportExport {
    pub file_url: String,
}

pub fn validate_link(link: &str) -> Result<(), String> {
    let trimmed = link.trim();
    if trimmed.is_empty() {
        return Err("A link is required.".to_string());
    }
    match Url::parse(trimmed) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => Ok(()),
        _ => Err(format!("\"{trimmed}\" is not a valid URL.")),
    }
}

pub fn validate_titled_link(title: &str, link: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("A title is required.".to_string());
    }
    validate_link(link)
}

pub fn validate_faq(question: &str, answer: &str) -> Result<(), String> {
    if question.trim().is_empty() || answer.trim().is_empty() {
        return Err("Both a question and an answer are required.".to_string());
    }
    Ok(())
}

pub fn validate_reply(body: &str) -> Result<(), String> {
    if body.trim().is_empty() {
        return Err("Reply text is required.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn user_payload_decodes() {
        let raw = r#"{
            "id": "u1",
            "name": "Jo Han",
            "email": "u1@example.com",
            "verification": "submitted",
            "channel_link": "not_linked",
            "earnings": { "total": 125000, "this_month": 4200, "pending": 900 }
        }"#;
        let user: AdminUser = serde_json::from_str(raw).unwrap();
        assert_eq!(user.verification, VerificationStatus::Submitted);
        assert_eq!(user.channel_link, ChannelLinkStatus::NotLinked);
        assert_eq!(user.earnings.total, 125_000);
    }

    #[test]
    fn unknown_status_fails_fast() {
        let raw = r#"{
            "id": "sub_1",
            "user_email": "u1@example.com",
            "month": "2024-05",
            "amount": 150000,
            "proof_url": "https://cdn.example.com/proof.png",
            "status": "maybe",
            "submitted_at": "2024-06-01"
        }"#;
        assert!(serde_json::from_str::<ManualIncomeSubmission>(raw).is_err());
    }

    #[rstest]
    #[case("not-a-url")]
    #[case("")]
    #[case("ftp://example.com/file")]
    #[case("   ")]
    fn bad_links_are_rejected(#[case] link: &str) {
        assert!(validate_link(link).is_err());
    }

    #[rstest]
    #[case("https://videos.example.com/intro.mp4")]
    #[case("http://example.com")]
    fn good_links_pass(#[case] link: &str) {
        assert!(validate_link(link).is_ok());
    }

    #[test]
    fn empty_title_blocks_submission() {
        let err = validate_titled_link("  ", "https://example.com").unwrap_err();
        assert_eq!(err, "A title is required.");
    }

    #[test]
    fn faq_requires_both_fields() {
        assert!(validate_faq("How do payouts work?", "").is_err());
        assert!(validate_faq("", "Weekly.").is_err());
        assert!(validate_faq("How do payouts work?", "Weekly.").is_ok());
    }

    #[rstest]
    #[case("open", Some(TicketStatus::Open))]
    #[case("closed", Some(TicketStatus::Closed))]
    #[case("all", None)]
    fn ticket_status_query_roundtrip(#[case] raw: &str, #[case] expected: Option<TicketStatus>) {
        assert_eq!(TicketStatus::from_query(raw), expected);
    }
}
