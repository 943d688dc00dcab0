mod batches;
mod content;
mod reports;
mod submissions;
mod tickets;
mod users;

pub use batches::BatchesPage;
pub use content::ContentPage;
pub use reports::ReportsPage;
pub use submissions::SubmissionsPage;
pub use tickets::TicketsPage;
pub use users::UsersPage;
