// Singleton: one globally reachable instance, every access site sharing it.
// Shown twice: OnceLock for read-mostly state, lazy_static + Mutex when the
// instance itself mutates.

use lazy_static::lazy_static;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock};

// =============================================================================
// OnceLock singleton
// =============================================================================

struct VisitCounter {
    visits: AtomicUsize,
}

impl VisitCounter {
    fn global() -> &'static VisitCounter {
        static INSTANCE: OnceLock<VisitCounter> = OnceLock::new();
        INSTANCE.get_or_init(|| VisitCounter {
            visits: AtomicUsize::new(0),
        })
    }

    fn record_visit(&self) -> usize {
        self.visits.fetch_add(1, Ordering::Relaxed) + 1
    }
}

// =============================================================================
// lazy_static singleton
// =============================================================================

struct AppSettings {
    app_name: String,
    debug: bool,
}

lazy_static! {
    static ref APP_SETTINGS: Mutex<AppSettings> = Mutex::new(AppSettings {
        app_name: "pattern-catalogue".to_string(),
        debug: false,
    });
}

fn main() {
    println!("== OnceLock singleton ==");
    let counter1 = VisitCounter::global();
    println!("Number of visits: {}", counter1.record_visit());

    let counter2 = VisitCounter::global();
    println!("Number of visits: {}", counter2.record_visit());

    println!("Same instance: {}", std::ptr::eq(counter1, counter2));

    println!("\n== lazy_static singleton ==");
    {
        let settings = APP_SETTINGS.lock().unwrap();
        println!("{} (debug: {})", settings.app_name, settings.debug);
    }
    {
        // A different access site sees and changes the same instance.
        let mut settings = APP_SETTINGS.lock().unwrap();
        settings.debug = true;
    }
    let settings = APP_SETTINGS.lock().unwrap();
    println!("{} (debug: {})", settings.app_name, settings.debug);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_returns_the_same_instance() {
        let first = VisitCounter::global();
        let second = VisitCounter::global();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_visits_accumulate_across_access_sites() {
        let before = VisitCounter::global().record_visit();
        let after = VisitCounter::global().record_visit();
        assert_eq!(after, before + 1);
    }

    #[test]
    fn test_lazy_static_state_is_shared() {
        {
            let mut settings = APP_SETTINGS.lock().unwrap();
            settings.app_name = "renamed".to_string();
        }
        let settings = APP_SETTINGS.lock().unwrap();
        assert_eq!(settings.app_name, "renamed");
    }
}
