use chrono::{NaiveDate, NaiveTime};

use crate::catalog::ServiceCatalog;
use crate::errors::BookingError;
use crate::types::{Appointment, BookingRequest};

pub trait AppointmentBackend: Clone + Send + Sync + 'static {
    /// Free slots for a date, ascending. Past dates yield an empty list.
    fn available_slots(&self, date: NaiveDate) -> Vec<NaiveTime>;

    /// Validate a booking request and commit it as one atomic step.
    fn book(
        &self,
        catalog: &ServiceCatalog,
        request: BookingRequest,
    ) -> Result<Appointment, BookingError>;

    /// All stored appointments in storage order.
    fn appointments(&self) -> Vec<Appointment>;

    fn appointment(&self, id: u32) -> Option<Appointment>;

    /// Remove an appointment, freeing its slot. Returns the removed record
    /// with its status flipped to cancelled.
    fn cancel(&self, id: u32) -> Result<Appointment, BookingError>;
}
