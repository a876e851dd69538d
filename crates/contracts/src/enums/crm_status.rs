use serde::{Deserialize, Serialize};

/// Статус клиента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    #[default]
    Active,
    Inactive,
    Prospect,
}

impl CustomerStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "فعال",
            CustomerStatus::Inactive => "غیرفعال",
            CustomerStatus::Prospect => "بالقوه",
        }
    }
}

/// Статус тикета поддержки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            TicketStatus::Open => "باز",
            TicketStatus::InProgress => "در حال بررسی",
            TicketStatus::Resolved => "حل شده",
            TicketStatus::Closed => "بسته",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

/// Статус лида в воронке продаж
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

impl LeadStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            LeadStatus::New => "جدید",
            LeadStatus::Contacted => "تماس گرفته شده",
            LeadStatus::Qualified => "واجد شرایط",
            LeadStatus::Converted => "تبدیل شده",
            LeadStatus::Lost => "از دست رفته",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "انجام نشده",
            TaskStatus::InProgress => "در حال انجام",
            TaskStatus::Done => "انجام شده",
        }
    }
}

/// Статус коммерческого документа (пред-фактура, фактура, заказ поставщику)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    #[default]
    Draft,
    Sent,
    Accepted,
    Rejected,
    Paid,
    Overdue,
    Received,
    Cancelled,
}

impl DocumentStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "پیش‌نویس",
            DocumentStatus::Sent => "ارسال شده",
            DocumentStatus::Accepted => "پذیرفته شده",
            DocumentStatus::Rejected => "رد شده",
            DocumentStatus::Paid => "پرداخت شده",
            DocumentStatus::Overdue => "سررسید گذشته",
            DocumentStatus::Received => "دریافت شده",
            DocumentStatus::Cancelled => "لغو شده",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statuses_use_snake_case_on_the_wire() {
        let status: TicketStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(status, TicketStatus::InProgress);
        assert_eq!(
            serde_json::to_string(&DocumentStatus::Overdue).unwrap(),
            "\"overdue\""
        );
    }
}
