use crate::schedule::Schedule;
use crate::test_utils::{arb_flight_number, flight_at, id};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_find_by_number_returns_added_flights(
        numbers in prop::collection::vec(arb_flight_number(), 1..20),
        removals in prop::collection::vec(0..20usize, 0..5)
    ) {
        let mut schedule = Schedule::new();
        for (i, number) in numbers.iter().enumerate() {
            let dep = 60 * i as u64;
            schedule.add_flight(flight_at(&format!("FL_{i}"), number, dep, dep + 90)).unwrap();
        }
        for r in &removals {
            let _ = schedule.remove_flight(&id(&format!("FL_{r}")));
        }

        for (i, number) in numbers.iter().enumerate() {
            let flight_id = id(&format!("FL_{i}"));
            let found = schedule.find_by_number(number);
            if removals.contains(&i) {
                prop_assert!(found.iter().all(|f| *f.id() != flight_id));
                prop_assert!(schedule.get(&flight_id).is_none());
            } else {
                prop_assert!(found.iter().any(|f| *f.id() == flight_id));
                prop_assert_eq!(number, &schedule.get(&flight_id).unwrap().flight_number);
            }
            prop_assert!(found.iter().all(|f| f.flight_number == *number));
        }

        // insertion order survives removals
        let positions: Vec<usize> = schedule
            .all()
            .iter()
            .map(|f| f.id()[3..].parse().unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
