use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // One appointment per (date, time_slot); the booking service relies on this
    // to settle concurrent bookings of the same slot.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            customer_email VARCHAR(255) NOT NULL,
            name VARCHAR(255) NOT NULL,
            phone VARCHAR(64) NOT NULL,
            vehicle_make VARCHAR(255) NOT NULL,
            vehicle_model VARCHAR(255) NOT NULL,
            date DATE NOT NULL,
            time_slot VARCHAR(16) NOT NULL,
            comment TEXT NULL,
            vehicle_type VARCHAR(64) NOT NULL,
            plan_price INTEGER NOT NULL,
            extra_features TEXT[] NOT NULL DEFAULT '{}',
            status VARCHAR(16) NOT NULL DEFAULT 'booked',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT unique_appointment_slot UNIQUE (date, time_slot),
            CONSTRAINT valid_plan_price CHECK (plan_price > 0),
            CONSTRAINT valid_status CHECK (status IN ('booked', 'completed'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_appointments_date ON appointments(date);
        CREATE INDEX IF NOT EXISTS idx_appointments_customer_email ON appointments(customer_email);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
