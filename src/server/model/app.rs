use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Shared token expected on marketplace webhook deliveries
    pub hotmart_hottok: String,
}

impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, hotmart_hottok): (DatabaseConnection, String)) -> Self {
        Self { db, hotmart_hottok }
    }
}
