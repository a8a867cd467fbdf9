use std::sync::Arc;

use crate::data::DataStore;
use crate::error::LoadError;

#[derive(Debug, Clone)]
pub enum Message {
    ToggleSidebar,
    DataLoaded(Result<DataStore, Arc<LoadError>>),
    SelectStudio(String),
}
