use chrono::{NaiveDate, NaiveTime};

/// The daily grid runs 09:00 through 16:30 inclusive in 30-minute steps.
pub const SLOTS_PER_DAY: usize = 16;

pub fn slot_grid() -> Vec<NaiveTime> {
    let mut slots = Vec::with_capacity(SLOTS_PER_DAY);
    for hour in 9..17 {
        for minute in [0, 30] {
            if let Some(slot) = NaiveTime::from_hms_opt(hour, minute, 0) {
                slots.push(slot);
            }
        }
    }
    slots
}

pub fn on_grid(time: NaiveTime) -> bool {
    slot_grid().contains(&time)
}

/// Free slots for `date`, given the current calendar date and time-of-day.
/// Past dates have no free slots; on the current date, slots at or before
/// `now` are gone. Remaining candidates are dropped when `is_booked` says the
/// slot is occupied. Output stays in grid order, so it is ascending.
pub fn free_slots<F>(date: NaiveDate, today: NaiveDate, now: NaiveTime, is_booked: F) -> Vec<NaiveTime>
where
    F: Fn(NaiveTime) -> bool,
{
    if date < today {
        return Vec::new();
    }

    slot_grid()
        .into_iter()
        .filter(|slot| !(date == today && *slot <= now))
        .filter(|slot| !is_booked(*slot))
        .collect()
}
