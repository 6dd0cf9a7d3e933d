use std::sync::Arc;

use crate::config::Config;
use crate::notify::Notifier;
use crate::store::ContactStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Arc<dyn ContactStore>,
    pub notifier: Option<Arc<dyn Notifier>>,
    pub config: Config,
}
