//! Action model for the proxy endpoint.
//!
//! Every request to `/proxy` names one action via the `action` query
//! parameter. Each action maps to a fixed Bitrix24 REST method (or, for
//! [`Action::TaskComments`], a fixed sequence of them) and requires exactly
//! one additional query parameter carrying the entity identifier.

/// An operation the proxy can perform against Bitrix24.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// CRM deal lookup (`crm.deal.get`).
    Deal,
    /// CRM contact lookup (`crm.contact.get`).
    Contact,
    /// CRM company lookup (`crm.company.get`).
    Company,
    /// Tasks bound to a deal (`tasks.task.list`).
    Tasks,
    /// Single task lookup (`tasks.task.get`).
    Task,
    /// Merged comment timeline for a task (comment items plus chat messages).
    TaskComments,
    /// CRM activities owned by a deal (`crm.activity.list`).
    Activities,
    /// Smart invoice items under a deal (`crm.item.list`, entity type 31).
    SmartInvoice,
    /// Smart production items under a deal (`crm.item.list`, entity type 1070).
    SmartProduction,
    /// Drive file metadata (`disk.file.get`).
    File,
}

impl Action {
    /// All actions, in documentation order.
    pub const ALL: [Action; 10] = [
        Action::Deal,
        Action::Contact,
        Action::Company,
        Action::Tasks,
        Action::Task,
        Action::TaskComments,
        Action::Activities,
        Action::SmartInvoice,
        Action::SmartProduction,
        Action::File,
    ];

    /// Parse an `action` query parameter value.
    ///
    /// Returns `None` for names outside the closed set; the HTTP layer
    /// turns that into an `unknown_action` response.
    pub fn parse(name: &str) -> Option<Action> {
        match name {
            "deal" => Some(Action::Deal),
            "contact" => Some(Action::Contact),
            "company" => Some(Action::Company),
            "tasks" => Some(Action::Tasks),
            "task" => Some(Action::Task),
            "task_comments" => Some(Action::TaskComments),
            "activities" => Some(Action::Activities),
            "smart_invoice" => Some(Action::SmartInvoice),
            "smart_production" => Some(Action::SmartProduction),
            "file" => Some(Action::File),
            _ => None,
        }
    }

    /// The wire name carried in the `action` query parameter.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Deal => "deal",
            Action::Contact => "contact",
            Action::Company => "company",
            Action::Tasks => "tasks",
            Action::Task => "task",
            Action::TaskComments => "task_comments",
            Action::Activities => "activities",
            Action::SmartInvoice => "smart_invoice",
            Action::SmartProduction => "smart_production",
            Action::File => "file",
        }
    }

    /// The query parameter that must accompany this action.
    pub fn required_param(&self) -> &'static str {
        match self {
            Action::Deal | Action::Tasks => "deal_id",
            Action::Contact => "contact_id",
            Action::Company => "company_id",
            Action::Task | Action::TaskComments => "task_id",
            Action::Activities => "owner_id",
            Action::SmartInvoice | Action::SmartProduction => "parent_id",
            Action::File => "file_id",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
