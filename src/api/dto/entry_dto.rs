//! 条目 DTO
//!
//! 定义条目相关的请求和响应数据结构。线上字段使用 camelCase。

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::api::validation::{
    Validatable, ValidationError, ValidationResult, missing_fields, reject_blank,
};
use crate::models::{EntryPatch, KnowledgeEntry, NewEntry};

/// 创建条目请求
///
/// 字段均为可选，缺失字段由校验报告，而不是解析失败。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateEntryRequest {
    /// 标题
    pub title: Option<String>,
    /// 描述
    pub description: Option<String>,
    /// 配图地址
    pub image_url: Option<String>,
}

impl Validatable for CreateEntryRequest {
    fn validate(&self) -> ValidationResult<()> {
        let missing = missing_fields(&[
            ("title", self.title.as_deref()),
            ("description", self.description.as_deref()),
        ]);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingRequired {
                fields: missing.into_iter().map(str::to_string).collect(),
            })
        }
    }
}

impl CreateEntryRequest {
    /// 校验并转换为新建输入，空字符串配图视为无配图
    pub fn into_new_entry(self) -> ValidationResult<NewEntry> {
        self.validate()?;
        Ok(NewEntry {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            image_url: self.image_url.filter(|url| !url.is_empty()),
        })
    }
}

/// 更新条目请求
///
/// 省略的字段保持不变；`imageUrl` 为 `null` 或空字符串时清除配图。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateEntryRequest {
    /// 标题
    pub title: Option<String>,
    /// 描述
    pub description: Option<String>,
    /// 配图地址
    #[serde(with = "::serde_with::rust::double_option")]
    pub image_url: Option<Option<String>>,
}

impl Validatable for UpdateEntryRequest {
    fn validate(&self) -> ValidationResult<()> {
        reject_blank("title", self.title.as_deref())?;
        reject_blank("description", self.description.as_deref())
    }
}

impl UpdateEntryRequest {
    /// 校验并转换为部分更新
    pub fn into_patch(self) -> ValidationResult<EntryPatch> {
        self.validate()?;
        Ok(EntryPatch {
            title: self.title,
            description: self.description,
            image_url: self
                .image_url
                .map(|url| url.filter(|url| !url.is_empty())),
        })
    }
}

fn iso8601_millis<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// 条目响应
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    /// 条目 ID
    pub id: String,
    /// 标题
    pub title: String,
    /// 描述
    pub description: String,
    /// 配图地址
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// 创建时间
    #[serde(serialize_with = "iso8601_millis")]
    pub created_at: DateTime<Utc>,
    /// 更新时间
    #[serde(serialize_with = "iso8601_millis")]
    pub updated_at: DateTime<Utc>,
}

impl From<KnowledgeEntry> for EntryResponse {
    fn from(entry: KnowledgeEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.title,
            description: entry.description,
            image_url: entry.image_url,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

/// 操作成功响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
