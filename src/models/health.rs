use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Health {
    pub ok: bool,
    pub started_at: DateTime<Utc>,
}

actor_message!(GetHealth() -> Health);
actor_message!(PingDatabase() -> String);

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthV1 {
    pub ok: bool,
    pub started_at: DateTime<Utc>,
}

json_responder!(HealthV1);

impl From<Health> for HealthV1 {
    fn from(health: Health) -> Self {
        Self {
            ok: health.ok,
            started_at: health.started_at,
        }
    }
}
