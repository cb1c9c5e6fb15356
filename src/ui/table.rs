use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, Int32Array, StringArray, UInt32Array, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use crate::data::model::{City, TripRecord};

// ---------------------------------------------------------------------------
// Raw trip pages → Arrow RecordBatch → text table
// ---------------------------------------------------------------------------

/// Build a record batch mirroring the source columns plus the derived ones.
/// Demographic columns are only included for cities that export them.
pub fn page_batch(trips: &[TripRecord], city: City) -> Result<RecordBatch> {
    let mut fields = vec![
        Field::new("row", DataType::UInt64, false),
        Field::new("Start Time", DataType::Utf8, false),
        Field::new("End Time", DataType::Utf8, true),
        Field::new("Trip Duration", DataType::Float64, false),
        Field::new("Start Station", DataType::Utf8, false),
        Field::new("End Station", DataType::Utf8, false),
        Field::new("User Type", DataType::Utf8, true),
    ];
    let mut columns: Vec<ArrayRef> = vec![
        Arc::new(UInt64Array::from_iter_values(trips.iter().map(|t| t.row as u64))),
        Arc::new(StringArray::from_iter_values(
            trips.iter().map(|t| t.start_time.to_string()),
        )),
        Arc::new(
            trips
                .iter()
                .map(|t| t.end_time.map(|e| e.to_string()))
                .collect::<StringArray>(),
        ),
        Arc::new(Float64Array::from_iter_values(trips.iter().map(|t| t.trip_duration))),
        Arc::new(StringArray::from_iter_values(trips.iter().map(|t| &t.start_station))),
        Arc::new(StringArray::from_iter_values(trips.iter().map(|t| &t.end_station))),
        Arc::new(trips.iter().map(|t| t.user_type.as_deref()).collect::<StringArray>()),
    ];

    if city.has_demographics() {
        fields.push(Field::new("Gender", DataType::Utf8, true));
        fields.push(Field::new("Birth Year", DataType::Int32, true));
        columns.push(Arc::new(trips.iter().map(|t| t.gender.as_deref()).collect::<StringArray>()));
        columns.push(Arc::new(trips.iter().map(|t| t.birth_year).collect::<Int32Array>()));
    }

    fields.extend([
        Field::new("month", DataType::UInt32, false),
        Field::new("day_of_week", DataType::Utf8, false),
        Field::new("hour", DataType::UInt32, false),
        Field::new("city", DataType::Utf8, false),
    ]);
    columns.extend([
        Arc::new(UInt32Array::from_iter_values(trips.iter().map(|t| t.month))) as ArrayRef,
        Arc::new(StringArray::from_iter_values(trips.iter().map(|t| t.day.name()))) as ArrayRef,
        Arc::new(UInt32Array::from_iter_values(trips.iter().map(|t| t.hour))) as ArrayRef,
        Arc::new(StringArray::from_iter_values(trips.iter().map(|t| t.city.name()))) as ArrayRef,
    ]);

    RecordBatch::try_new(Arc::new(Schema::new(fields)), columns).context("building page batch")
}

/// Render a page of trips as a bordered text table.
pub fn render_page(trips: &[TripRecord], city: City) -> Result<String> {
    let batch = page_batch(trips, city)?;
    let table = pretty_format_batches(&[batch]).context("formatting page")?;
    Ok(table.to_string())
}
