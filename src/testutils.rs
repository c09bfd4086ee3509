use chrono::{Local, NaiveDate, NaiveTime};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};

use crate::backend::AppointmentBackend;
use crate::catalog::ServiceCatalog;
use crate::errors::BookingError;
use crate::types::{Appointment, AppointmentStatus, BookingRequest};

pub struct MockAppointmentBackendInner {
    pub calls_to_available_slots: AtomicU64,
    pub calls_to_book: AtomicU64,
    pub calls_to_appointments: AtomicU64,
    pub calls_to_appointment: AtomicU64,
    pub calls_to_cancel: AtomicU64,
    pub slots: Mutex<Vec<NaiveTime>>,
    pub appointments: Mutex<Vec<Appointment>>,
    pub book_error: Mutex<Option<BookingError>>,
    pub cancel_error: Mutex<Option<BookingError>>,
}

#[derive(Clone)]
pub struct MockAppointmentBackend(pub Arc<MockAppointmentBackendInner>);

impl MockAppointmentBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockAppointmentBackendInner {
            calls_to_available_slots: AtomicU64::default(),
            calls_to_book: AtomicU64::default(),
            calls_to_appointments: AtomicU64::default(),
            calls_to_appointment: AtomicU64::default(),
            calls_to_cancel: AtomicU64::default(),
            slots: Mutex::default(),
            appointments: Mutex::default(),
            book_error: Mutex::default(),
            cancel_error: Mutex::default(),
        }))
    }

    pub fn sample_appointment() -> Appointment {
        Appointment {
            id: 1,
            name: "A".into(),
            email: "a@b.com".into(),
            phone: "555".into(),
            service_id: 1,
            service_name: "General Consultation".into(),
            date: NaiveDate::from_ymd_opt(2099, 1, 10).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            notes: String::new(),
            status: AppointmentStatus::Confirmed,
            created_at: Local::now(),
        }
    }
}

impl AppointmentBackend for MockAppointmentBackend {
    fn available_slots(&self, _date: NaiveDate) -> Vec<NaiveTime> {
        self.0
            .calls_to_available_slots
            .fetch_add(1, Ordering::SeqCst);
        self.0.slots.lock().unwrap().clone()
    }

    fn book(
        &self,
        _catalog: &ServiceCatalog,
        _request: BookingRequest,
    ) -> Result<Appointment, BookingError> {
        self.0.calls_to_book.fetch_add(1, Ordering::SeqCst);
        match self.0.book_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(Self::sample_appointment()),
        }
    }

    fn appointments(&self) -> Vec<Appointment> {
        self.0.calls_to_appointments.fetch_add(1, Ordering::SeqCst);
        self.0.appointments.lock().unwrap().clone()
    }

    fn appointment(&self, id: u32) -> Option<Appointment> {
        self.0.calls_to_appointment.fetch_add(1, Ordering::SeqCst);
        self.0
            .appointments
            .lock()
            .unwrap()
            .iter()
            .find(|apt| apt.id == id)
            .cloned()
    }

    fn cancel(&self, _id: u32) -> Result<Appointment, BookingError> {
        self.0.calls_to_cancel.fetch_add(1, Ordering::SeqCst);
        match self.0.cancel_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => {
                let mut appointment = Self::sample_appointment();
                appointment.status = AppointmentStatus::Cancelled;
                Ok(appointment)
            }
        }
    }
}
