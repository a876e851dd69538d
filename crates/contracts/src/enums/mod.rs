pub mod crm_status;

pub use crm_status::{CustomerStatus, DocumentStatus, LeadStatus, TaskStatus, TicketPriority, TicketStatus};
