use crate::domain::common::AggregateRoot;
use crate::enums::{TicketPriority, TicketStatus};
use serde::{Deserialize, Serialize};

crate::string_id!(
    /// Номер тикета (например, "T-1")
    TicketId
);

/// Тикет службы поддержки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub subject: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub status: TicketStatus,
    #[serde(default)]
    pub priority: TicketPriority,
}

impl AggregateRoot for Ticket {
    type Id = TicketId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> &str {
        &self.subject
    }

    fn collection_name() -> &'static str {
        "tickets"
    }

    fn element_name() -> &'static str {
        "تیکت"
    }

    fn list_name() -> &'static str {
        "تیکت‌ها"
    }
}
