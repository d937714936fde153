pub mod config;
pub mod error;
pub mod reminders;
pub mod reply;

use maple_content::ContentService;
use maple_database::Database;

pub use config::Config;
pub use error::CommandError;
pub use reminders::ReminderScheduler;

pub type Error = anyhow::Error;

#[derive(Clone, Debug)]
pub struct Data {
    pub db: Database,
    pub content: ContentService,
    pub reminders: ReminderScheduler,
}

impl Data {
    pub fn new(db: Database, content: ContentService) -> Self {
        let reminders = ReminderScheduler::new(db.clone());
        Self {
            db,
            content,
            reminders,
        }
    }
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
