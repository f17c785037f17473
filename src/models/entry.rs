use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 知识条目
///
/// 技术人员记录的一条知识：标题、描述和可选的配图。
/// `id` 与 `created_at` 创建后不可变，`updated_at` 每次成功更新时刷新。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeEntry {
    /// 条目唯一标识
    pub id: String,

    /// 标题（非空）
    pub title: String,

    /// 描述（非空）
    pub description: String,

    /// 配图地址
    pub image_url: Option<String>,

    /// 创建时间
    pub created_at: DateTime<Utc>,

    /// 最后更新时间
    pub updated_at: DateTime<Utc>,
}

/// 新建条目所需字段
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEntry {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl NewEntry {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: None,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// 条目的部分更新
///
/// `None` 表示保持原值。`image_url` 多一层：`Some(None)` 清除配图。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<Option<String>>,
}

impl EntryPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.image_url.is_none()
    }
}

impl KnowledgeEntry {
    /// 创建新条目，分配新的 ID，创建时间与更新时间相同
    pub fn new(input: NewEntry) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            description: input.description,
            image_url: input.image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// 覆盖补丁中提供的字段并刷新更新时间
    pub fn apply(&mut self, patch: EntryPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        self.touch();
    }

    /// 刷新更新时间，保证不早于创建时间
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.created_at);
    }

    /// 是否带有配图
    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }
}

fn seed_timestamp(day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2025, 3, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn seed_entry(
    id: &str,
    title: &str,
    description: &str,
    image_url: Option<&str>,
    day: u32,
) -> KnowledgeEntry {
    let timestamp = seed_timestamp(day);
    KnowledgeEntry {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: image_url.map(str::to_string),
        created_at: timestamp,
        updated_at: timestamp,
    }
}

/// 示例条目，ID 为 "1"、"2"、"3"
pub fn seed_entries() -> Vec<KnowledgeEntry> {
    vec![
        seed_entry(
            "1",
            "Safety Protocol Update",
            "New safety procedures for handling hydraulic equipment. Always wear protective gear and follow lockout/tagout procedures.",
            Some("/assets/safetyGear.png"),
            1,
        ),
        seed_entry(
            "2",
            "Machine Calibration Process",
            "Step-by-step guide for calibrating CNC machines. Check alignment every 100 hours of operation.",
            Some("/assets/cnc-machine.png"),
            2,
        ),
        seed_entry(
            "3",
            "Quality Control Checklist",
            "Daily quality control procedures for production line. Inspect dimensions, surface finish, and material integrity.",
            None,
            3,
        ),
    ]
}
