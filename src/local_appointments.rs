use chrono::{Local, NaiveDate, NaiveTime};
use std::sync::{Arc, Mutex};

use crate::availability;
use crate::backend::AppointmentBackend;
use crate::catalog::ServiceCatalog;
use crate::errors::BookingError;
use crate::types::{Appointment, AppointmentStatus, BookingRequest, DATE_FORMAT, TIME_FORMAT};

/// In-memory appointment store. One mutex guards the whole table; booking
/// holds it across validation and commit, so conflicting requests serialize.
#[derive(Debug, Clone, Default)]
pub struct LocalAppointments {
    inner: Arc<Mutex<Store>>,
}

#[derive(Debug, Default)]
struct Store {
    appointments: Vec<Appointment>,
    // Strictly monotonic, never reset on cancellation, so ids are not reused.
    next_id: u32,
}

impl Store {
    fn slot_taken(&self, date: NaiveDate, time: NaiveTime) -> bool {
        self.appointments
            .iter()
            .any(|apt| apt.date == date && apt.time == time)
    }

    /// Conflict test against the client's literal date/time strings. Stored
    /// values are compared in their canonical text form; this runs before the
    /// date is ever parsed, which keeps conflict reporting ahead of date
    /// validation in the error order.
    fn slot_taken_raw(&self, date: &str, time: &str) -> bool {
        self.appointments.iter().any(|apt| {
            apt.date.format(DATE_FORMAT).to_string() == date
                && apt.time.format(TIME_FORMAT).to_string() == time
        })
    }
}

impl AppointmentBackend for LocalAppointments {
    fn available_slots(&self, date: NaiveDate) -> Vec<NaiveTime> {
        let store = self.inner.lock().unwrap();
        let now = Local::now();
        availability::free_slots(date, now.date_naive(), now.time(), |slot| {
            store.slot_taken(date, slot)
        })
    }

    fn book(
        &self,
        catalog: &ServiceCatalog,
        request: BookingRequest,
    ) -> Result<Appointment, BookingError> {
        let mut store = self.inner.lock().unwrap();

        let mut missing = Vec::new();
        for (field, present) in [
            ("name", request.name.is_some()),
            ("email", request.email.is_some()),
            ("phone", request.phone.is_some()),
            ("service_id", request.service_id.is_some()),
            ("date", request.date.is_some()),
            ("time", request.time.is_some()),
        ] {
            if !present {
                missing.push(field.to_string());
            }
        }
        let (Some(name), Some(email), Some(phone), Some(service_id), Some(date_raw), Some(time_raw)) = (
            request.name,
            request.email,
            request.phone,
            request.service_id,
            request.date,
            request.time,
        ) else {
            return Err(BookingError::MissingFields(missing));
        };

        if !email.contains('@') {
            return Err(BookingError::InvalidEmail);
        }

        let service = catalog
            .find(service_id)
            .ok_or(BookingError::InvalidService)?;

        if store.slot_taken_raw(&date_raw, &time_raw) {
            return Err(BookingError::SlotTaken);
        }

        let date = NaiveDate::parse_from_str(&date_raw, DATE_FORMAT)
            .map_err(|_| BookingError::InvalidDate)?;
        if date < Local::now().date_naive() {
            return Err(BookingError::PastDate);
        }

        let time = NaiveTime::parse_from_str(&time_raw, TIME_FORMAT)
            .map_err(|_| BookingError::InvalidTime)?;
        if !availability::on_grid(time) {
            return Err(BookingError::InvalidTime);
        }

        // The raw comparison above misses textual variants of the same date
        // ("2099-1-10" vs "2099-01-10"), so the parsed key is checked again
        // before the insert. Same lock, so nothing can slip in between.
        if store.slot_taken(date, time) {
            return Err(BookingError::SlotTaken);
        }

        store.next_id += 1;
        let appointment = Appointment {
            id: store.next_id,
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            phone: phone.trim().to_string(),
            service_id,
            service_name: service.name.clone(),
            date,
            time,
            notes: request.notes.unwrap_or_default().trim().to_string(),
            status: AppointmentStatus::Confirmed,
            created_at: Local::now(),
        };
        store.appointments.push(appointment.clone());

        tracing::info!(
            id = appointment.id,
            date = %appointment.date,
            time = %time_raw,
            service = %appointment.service_name,
            "appointment booked"
        );
        Ok(appointment)
    }

    fn appointments(&self) -> Vec<Appointment> {
        self.inner.lock().unwrap().appointments.clone()
    }

    fn appointment(&self, id: u32) -> Option<Appointment> {
        self.inner
            .lock()
            .unwrap()
            .appointments
            .iter()
            .find(|apt| apt.id == id)
            .cloned()
    }

    fn cancel(&self, id: u32) -> Result<Appointment, BookingError> {
        let mut store = self.inner.lock().unwrap();
        let index = store
            .appointments
            .iter()
            .position(|apt| apt.id == id)
            .ok_or(BookingError::NotFound)?;

        let mut appointment = store.appointments.remove(index);
        appointment.status = AppointmentStatus::Cancelled;
        tracing::info!(id = appointment.id, "appointment cancelled");
        Ok(appointment)
    }
}
