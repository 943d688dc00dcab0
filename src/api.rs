use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use web_sys::RequestCredentials;

use crate::models::{
    AdminUser, AiVideo, AssignmentBatch, FaqItem, ManualIncomeSubmission, ReportExport,
    ReportKind, ReviewDecision, SubmissionStatus, SupportTicket, TicketStatus, TutorialItem,
    VerificationStatus,
};

pub const API_BASE_URL: &str = "http://localhost:5000";

const TOKEN_KEY: &str = "access_token";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error. Check your connection and try again.")]
    Network,
    #[error("Session expired. Log in again.")]
    Unauthorized,
    #[error("{0}")]
    Server(String),
    #[error("Unexpected response from the server.")]
    Decode,
}

fn access_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(TOKEN_KEY).ok()?
}

pub fn store_token(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
}

pub fn clear_token() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

pub fn has_session() -> bool {
    access_token().map(|token| !token.is_empty()).unwrap_or(false)
}

fn authorized(req: RequestBuilder) -> RequestBuilder {
    let mut req = req.credentials(RequestCredentials::Include);
    if let Some(token) = access_token() {
        req = req.header("Authorization", &format!("Bearer {token}"));
    }
    req
}

/// Prefers the server-provided body over a generic fallback.
pub(crate) fn failure_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Request failed ({status}).")
    } else {
        trimmed.to_string()
    }
}

async fn ensure_ok(resp: &Response) -> Result<(), ApiError> {
    if resp.status() == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Server(failure_message(resp.status(), &body)));
    }
    Ok(())
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    ensure_ok(&resp).await?;
    resp.json::<T>().await.map_err(|_| ApiError::Decode)
}

async fn get_json<T: DeserializeOwned>(
    path: &str,
    params: Vec<(&'static str, String)>,
) -> Result<T, ApiError> {
    let url = format!("{API_BASE_URL}{path}");
    let mut req = Request::get(&url);
    if !params.is_empty() {
        req = req.query(params.iter().map(|(k, v)| (*k, v.as_str())));
    }
    let resp = authorized(req)
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    read_json(resp).await
}

async fn post_empty(path: String) -> Result<(), ApiError> {
    let url = format!("{API_BASE_URL}{path}");
    let resp = authorized(Request::post(&url))
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    ensure_ok(&resp).await
}

async fn send_json<T: DeserializeOwned, B: Serialize>(
    req: RequestBuilder,
    body: &B,
) -> Result<T, ApiError> {
    let req = authorized(req).json(body).map_err(|_| ApiError::Decode)?;
    let resp = req.send().await.map_err(|_| ApiError::Network)?;
    read_json(resp).await
}

async fn send_json_empty<B: Serialize>(req: RequestBuilder, body: &B) -> Result<(), ApiError> {
    let req = authorized(req).json(body).map_err(|_| ApiError::Decode)?;
    let resp = req.send().await.map_err(|_| ApiError::Network)?;
    ensure_ok(&resp).await
}

async fn delete_empty(path: String) -> Result<(), ApiError> {
    let url = format!("{API_BASE_URL}{path}");
    let resp = authorized(Request::delete(&url))
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    ensure_ok(&resp).await
}

// ---------- auth ----------

#[derive(Serialize)]
struct LoginBody {
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

pub async fn login(email: String, password: String) -> Result<String, ApiError> {
    let url = format!("{API_BASE_URL}/api/auth/login");
    let req = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .json(&LoginBody { email, password })
        .map_err(|_| ApiError::Decode)?;
    let resp = req.send().await.map_err(|_| ApiError::Network)?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Server(failure_message(resp.status(), &body)));
    }
    let token: TokenResponse = resp.json().await.map_err(|_| ApiError::Decode)?;
    Ok(token.access_token)
}

pub async fn refresh_session() -> Result<String, ApiError> {
    let url = format!("{API_BASE_URL}/api/auth/refresh");
    let resp = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    if !resp.ok() {
        return Err(ApiError::Unauthorized);
    }
    let token: TokenResponse = resp.json().await.map_err(|_| ApiError::Decode)?;
    Ok(token.access_token)
}

pub async fn logout() -> Result<(), ApiError> {
    post_empty("/api/auth/logout".to_string()).await
}

// ---------- users ----------

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct UserQuery {
    pub search: String,
    pub verification: Option<VerificationStatus>,
}

pub async fn fetch_users(query: UserQuery) -> Result<Vec<AdminUser>, ApiError> {
    let mut params = Vec::new();
    let search = query.search.trim();
    if !search.is_empty() {
        params.push(("search", search.to_string()));
    }
    if let Some(status) = query.verification {
        params.push(("verification", status.as_query().to_string()));
    }
    get_json("/api/admin/users", params).await
}

pub async fn approve_verification(user_id: String) -> Result<(), ApiError> {
    post_empty(format!("/api/admin/users/{user_id}/approve-verification")).await
}

pub async fn approve_channel_link(user_id: String) -> Result<(), ApiError> {
    post_empty(format!("/api/admin/users/{user_id}/approve-channel-link")).await
}

pub async fn reset_password(user_id: String) -> Result<(), ApiError> {
    post_empty(format!("/api/admin/users/{user_id}/reset-password")).await
}

// ---------- income submissions ----------

pub async fn fetch_submissions(
    filter: Option<SubmissionStatus>,
) -> Result<Vec<ManualIncomeSubmission>, ApiError> {
    let mut params = Vec::new();
    if let Some(status) = filter {
        params.push(("status", status.as_query().to_string()));
    }
    get_json("/api/admin/income-submissions", params).await
}

#[derive(Serialize)]
struct ReviewBody {
    decision: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

pub async fn review_submission(
    id: String,
    decision: ReviewDecision,
    note: Option<String>,
) -> Result<(), ApiError> {
    let url = format!("{API_BASE_URL}/api/admin/income-submissions/{id}/review");
    send_json_empty(
        Request::post(&url),
        &ReviewBody {
            decision: decision.as_str(),
            note,
        },
    )
    .await
}

// ---------- support tickets ----------

pub async fn fetch_tickets(filter: Option<TicketStatus>) -> Result<Vec<SupportTicket>, ApiError> {
    let mut params = Vec::new();
    if let Some(status) = filter {
        params.push(("status", status.as_query().to_string()));
    }
    get_json("/api/admin/tickets", params).await
}

#[derive(Serialize)]
struct ReplyBody {
    body: String,
}

pub async fn reply_to_ticket(id: String, body: String) -> Result<(), ApiError> {
    let url = format!("{API_BASE_URL}/api/admin/tickets/{id}/replies");
    send_json_empty(Request::post(&url), &ReplyBody { body }).await
}

pub async fn close_ticket(id: String) -> Result<(), ApiError> {
    post_empty(format!("/api/admin/tickets/{id}/close")).await
}

// ---------- assignment batches ----------

pub async fn fetch_batches() -> Result<Vec<AssignmentBatch>, ApiError> {
    get_json("/api/admin/assignment-batches", Vec::new()).await
}

// ---------- content catalogs ----------

pub async fn fetch_videos() -> Result<Vec<AiVideo>, ApiError> {
    get_json("/api/admin/videos", Vec::new()).await
}

pub async fn create_video(video: AiVideo) -> Result<AiVideo, ApiError> {
    let url = format!("{API_BASE_URL}/api/admin/videos");
    send_json(Request::post(&url), &video).await
}

pub async fn update_video(id: String, video: AiVideo) -> Result<AiVideo, ApiError> {
    let url = format!("{API_BASE_URL}/api/admin/videos/{id}");
    send_json(Request::put(&url), &video).await
}

pub async fn delete_video(id: String) -> Result<(), ApiError> {
    delete_empty(format!("/api/admin/videos/{id}")).await
}

pub async fn fetch_tutorials() -> Result<Vec<TutorialItem>, ApiError> {
    get_json("/api/admin/tutorials", Vec::new()).await
}

pub async fn create_tutorial(item: TutorialItem) -> Result<TutorialItem, ApiError> {
    let url = format!("{API_BASE_URL}/api/admin/tutorials");
    send_json(Request::post(&url), &item).await
}

pub async fn update_tutorial(id: String, item: TutorialItem) -> Result<TutorialItem, ApiError> {
    let url = format!("{API_BASE_URL}/api/admin/tutorials/{id}");
    send_json(Request::put(&url), &item).await
}

pub async fn delete_tutorial(id: String) -> Result<(), ApiError> {
    delete_empty(format!("/api/admin/tutorials/{id}")).await
}

pub async fn fetch_faqs() -> Result<Vec<FaqItem>, ApiError> {
    get_json("/api/admin/faqs", Vec::new()).await
}

pub async fn create_faq(item: FaqItem) -> Result<FaqItem, ApiError> {
    let url = format!("{API_BASE_URL}/api/admin/faqs");
    send_json(Request::post(&url), &item).await
}

pub async fn update_faq(id: String, item: FaqItem) -> Result<FaqItem, ApiError> {
    let url = format!("{API_BASE_URL}/api/admin/faqs/{id}");
    send_json(Request::put(&url), &item).await
}

pub async fn delete_faq(id: String) -> Result<(), ApiError> {
    delete_empty(format!("/api/admin/faqs/{id}")).await
}

// ---------- reports ----------

pub async fn export_report(kind: ReportKind) -> Result<ReportExport, ApiError> {
    let url = format!("{API_BASE_URL}/api/admin/reports/{}/export", kind.as_path());
    let resp = authorized(Request::post(&url))
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    read_json(resp).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_preferred() {
        assert_eq!(
            failure_message(422, "Submission already reviewed."),
            "Submission already reviewed."
        );
    }

    #[test]
    fn blank_bodies_fall_back_to_a_generic_message() {
        assert_eq!(failure_message(500, "   "), "Request failed (500).");
        assert_eq!(failure_message(404, ""), "Request failed (404).");
    }
}
