use async_trait::async_trait;
use guardias_core::models::shift::ShiftRecord;
use mockall::mock;

use crate::source::ShiftSource;

// Mock shift source for testing
mock! {
    pub ShiftSource {}

    #[async_trait]
    impl ShiftSource for ShiftSource {
        async fn shifts_for_schedule(&self, schedule_id: i64) -> eyre::Result<Vec<ShiftRecord>>;

        async fn all_shifts(&self) -> eyre::Result<Vec<ShiftRecord>>;
    }
}
