//! HTTP client for the g0v company data API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base URL of the g0v company data API.
pub const COMPANY_API_URL: &str = "https://company.g0v.ronny.tw/api/";

/// Result of a company directory lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInfo {
    /// Number of directory matches. Greater than 1 means the query was
    /// ambiguous and `name`/`id` are unset.
    pub found: u64,
    /// Registered company name.
    pub name: Option<String>,
    /// Unified business number.
    pub id: Option<String>,
    /// Whether this looks like the Taiwan branch of a foreign company, in
    /// which case `name` is the parent company's name, not the branch's
    /// registered invoice title.
    pub fdi: bool,
}

/// Error from the company directory API.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum LookupError {
    /// Network or HTTP error.
    #[error("directory network error: {0}")]
    Network(String),
    /// The API returned a non-success status.
    #[error("directory API error: {0}")]
    Api(String),
    /// Failed to parse the response body.
    #[error("directory parse error: {0}")]
    Parse(String),
}

/// `search?q=` response envelope.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    found: Option<u64>,
    data: Option<Vec<CompanyData>>,
}

/// `show/{id}` response envelope.
#[derive(Debug, Deserialize)]
struct ShowResponse {
    data: Option<CompanyData>,
}

/// One directory record. The API merges several government datasets, so the
/// fields are Chinese dataset keys and their types vary between records.
#[derive(Debug, Deserialize)]
struct CompanyData {
    /// Unified business number; a string in most datasets, bare number in some.
    #[serde(default, rename = "統一編號")]
    unified_number: Option<IdField>,
    /// Ministry of Finance registration (carries the invoice title).
    #[serde(default, rename = "財政部")]
    ministry_of_finance: Option<MofRecord>,
    /// Company-register name; an array when the company has multiple names.
    #[serde(default, rename = "公司名稱")]
    register_name: Option<NameField>,
    /// Operating capital allocated to the ROC — present on branches of
    /// foreign companies.
    #[serde(default, rename = "在中華民國境內營運資金")]
    roc_operating_capital: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct MofRecord {
    /// Business entity name as registered for invoicing. Occasionally a
    /// non-string value in malformed records, hence the loose type.
    #[serde(default, rename = "營業人名稱")]
    business_name: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdField {
    Text(String),
    Number(u64),
}

impl IdField {
    fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NameField {
    One(String),
    Many(Vec<String>),
}

impl CompanyData {
    /// MoF invoice title if present, else the register name (first of many).
    fn single_name(&self) -> Option<String> {
        if let Some(name) = self.mof_name() {
            return Some(name);
        }
        match &self.register_name {
            Some(NameField::One(name)) => Some(name.clone()),
            Some(NameField::Many(names)) => names.first().cloned(),
            None => None,
        }
    }

    fn mof_name(&self) -> Option<String> {
        self.ministry_of_finance
            .as_ref()
            .and_then(|mof| mof.business_name.as_ref())
            .and_then(|v| v.as_str())
            .map(str::to_owned)
    }

    /// A record without an MoF registration but with ROC operating capital
    /// is the local branch of a foreign company — the register name is the
    /// parent's, not the invoice title.
    fn is_fdi_branch(&self) -> bool {
        if self.mof_name().is_some() {
            return false;
        }
        matches!(&self.roc_operating_capital, Some(v) if !v.is_null())
    }
}

async fn get_json<T: serde::de::DeserializeOwned>(
    path: &str,
    query: Option<(&str, &str)>,
) -> Result<T, LookupError> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| LookupError::Network(e.to_string()))?;

    let mut req = client.get(format!("{COMPANY_API_URL}{path}"));
    if let Some((key, value)) = query {
        req = req.query(&[(key, value)]);
    }

    let resp = req
        .send()
        .await
        .map_err(|e| LookupError::Network(e.to_string()))?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| LookupError::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(LookupError::Api(format!("HTTP {status}: {body}")));
    }

    serde_json::from_str(&body).map_err(|e| LookupError::Parse(e.to_string()))
}

/// Search the directory by free text (company name or tax ID).
///
/// `Ok(None)` when nothing matched or the single match has no usable name.
/// When the query is ambiguous the result carries only the match count.
///
/// This function is async and requires network access; the API is a free
/// public service without authentication.
pub async fn search_company(query: &str) -> Result<Option<CompanyInfo>, LookupError> {
    let resp: SearchResponse = get_json("search", Some(("q", query))).await?;

    let found = resp.found.unwrap_or(0);
    let data = resp.data.unwrap_or_default();
    if found == 0 || data.is_empty() {
        return Ok(None);
    }

    if found != 1 {
        return Ok(Some(CompanyInfo {
            found,
            name: None,
            id: None,
            fdi: false,
        }));
    }

    let company = &data[0];
    let Some(name) = company.single_name() else {
        return Ok(None);
    };

    Ok(Some(CompanyInfo {
        found: 1,
        name: Some(name),
        id: company.unified_number.as_ref().map(IdField::to_text),
        fdi: company.is_fdi_branch(),
    }))
}

/// Look up a company by its unified business number.
///
/// `Ok(None)` when the ID is unknown or the record has no usable name.
pub async fn company_by_id(company_id: &str) -> Result<Option<CompanyInfo>, LookupError> {
    let resp: ShowResponse = get_json(&format!("show/{company_id}"), None).await?;

    let Some(company) = resp.data else {
        return Ok(None);
    };
    let Some(name) = company.single_name() else {
        return Ok(None);
    };

    Ok(Some(CompanyInfo {
        found: 1,
        name: Some(name),
        id: Some(company_id.to_owned()),
        fdi: company.is_fdi_branch(),
    }))
}
