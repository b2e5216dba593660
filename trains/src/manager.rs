use utils::data::Manager;

use crate::schema::Validate;
use crate::store::{Store, StoreError};
use crate::train::Train;

/// Adds `train` to the list and sorts the whole list by departure time.
///
/// The sort is stable and compares times as plain strings.
pub fn add_train(mut trains: Vec<Train>, train: Train) -> Vec<Train> {
    trains.push(train);
    trains.sort_by(Train::cmp_start_time);
    trains
}

/// Every train whose trimmed destination is exactly `destination`, in list order.
pub fn select_by_destination<'a>(trains: &'a [Train], destination: &str) -> Vec<&'a Train> {
    trains.iter().filter(|t| t.goes_to(destination)).collect()
}

pub struct TrainManager {
    data: Vec<Train>,
    modified: bool,
}

impl Manager for TrainManager {
    type Data = Train;

    fn data(&self) -> &[Self::Data] {
        &self.data
    }

    fn data_mut(&mut self) -> &mut Vec<Self::Data> {
        &mut self.data
    }

    fn after_interact_mut_hook(&mut self) {
        self.modified = true;
    }
}

impl TrainManager {
    pub fn new(data: Vec<Train>) -> Self {
        TrainManager {
            data,
            modified: false,
        }
    }

    pub fn load<V: Validate>(store: &Store<V>) -> Result<Self, StoreError> {
        Ok(Self::new(store.load()?))
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn add_train(&mut self, num: i64, destination: String, start_time: String) {
        log::info!(
            "adding train #{} to {:?} at {:?}",
            num,
            destination,
            start_time
        );

        let data = std::mem::take(self.data_mut());
        self.data = add_train(data, Train::new(num, destination, start_time));
        self.after_interact_mut_hook();
    }

    pub fn select_by_destination(&self, destination: &str) -> Vec<&Train> {
        select_by_destination(self.data(), destination)
    }

    pub fn save_if_modified<V: Validate>(&self, store: &Store<V>) -> Result<(), StoreError> {
        if self.is_modified() {
            store.save(self.data())
        } else {
            log::debug!("nothing changed, not saving {}", store.path().display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train(num: i64, destination: &str, start_time: &str) -> Train {
        Train::new(num, destination.into(), start_time.into())
    }

    fn times(trains: &[Train]) -> Vec<&str> {
        trains
            .iter()
            .map(|t| t.start_time.as_deref().unwrap_or_default())
            .collect()
    }

    #[test]
    fn earlier_train_goes_first() {
        let trains = add_train(Vec::new(), train(101, "Berlin", "14:00"));
        let trains = add_train(trains, train(102, "Paris", "09:00"));

        assert_eq!(
            trains,
            vec![train(102, "Paris", "09:00"), train(101, "Berlin", "14:00")]
        );
    }

    #[test]
    fn every_addition_keeps_the_list_sorted() {
        let mut trains = Vec::new();

        for (i, time) in ["12:30", "9:00", "10:00", "00:15", "23:59", "10:00", ""]
            .iter()
            .enumerate()
        {
            trains = add_train(trains, train(i as i64, "X", time));

            let sorted = times(&trains).windows(2).all(|w| w[0] <= w[1]);
            assert!(sorted, "{:?}", times(&trains));
        }

        assert_eq!(
            times(&trains),
            vec!["", "00:15", "10:00", "10:00", "12:30", "23:59", "9:00"]
        );
    }

    #[test]
    fn equal_times_keep_insertion_order() {
        let trains = add_train(Vec::new(), train(1, "A", "10:00"));
        let trains = add_train(trains, train(2, "B", "10:00"));

        assert_eq!(trains[0].num, Some(1.into()));
        assert_eq!(trains[1].num, Some(2.into()));
    }

    #[test]
    fn unsorted_load_is_sorted_by_the_next_addition() {
        let trains = vec![train(1, "A", "20:00"), train(2, "B", "08:00")];
        let trains = add_train(trains, train(3, "C", "12:00"));

        assert_eq!(times(&trains), vec!["08:00", "12:00", "20:00"]);
    }

    #[test]
    fn select_trims_destinations() {
        let trains = add_train(Vec::new(), train(5, " Paris ", "10:00"));

        assert_eq!(select_by_destination(&trains, "Paris"), vec![&trains[0]]);
    }

    #[test]
    fn select_is_exact_and_keeps_order() {
        let trains = vec![
            train(1, "Paris", "08:00"),
            train(2, "paris", "09:00"),
            train(3, "Berlin", "10:00"),
            train(4, "Paris\t", "11:00"),
            Train::default(),
        ];
        let before = trains.clone();

        let selected: Vec<Option<i64>> = select_by_destination(&trains, "Paris")
            .iter()
            .map(|t| t.num.as_ref().and_then(|n| n.as_i64()))
            .collect();

        assert_eq!(selected, vec![Some(1), Some(4)]);
        assert!(select_by_destination(&trains, "Rome").is_empty());
        assert_eq!(trains, before);
    }

    #[test]
    fn only_additions_mark_the_manager_modified() {
        let mut manager = TrainManager::new(vec![train(1, "A", "10:00")]);

        assert_eq!(manager.select_by_destination("A").len(), 1);
        assert!(!manager.is_modified());

        manager.add_train(2, "B".into(), "09:00".into());
        assert!(manager.is_modified());
        assert_eq!(manager.data()[0].num, Some(2.into()));
    }

    #[test]
    fn unmodified_manager_does_not_touch_the_file() {
        use crate::schema::ValidationError;

        struct AcceptAll;
        impl Validate for AcceptAll {
            fn validate(&self, _raw: &serde_json::Value) -> Result<(), ValidationError> {
                Ok(())
            }
        }

        let path = utils::tmp::make_tmp(Some("json"));
        let store = Store::new(&path, AcceptAll);

        let mut manager = TrainManager::load(&store).unwrap();
        manager.save_if_modified(&store).unwrap();
        assert!(!path.exists());

        manager.add_train(7, "Омск".into(), "07:00".into());
        manager.save_if_modified(&store).unwrap();
        assert_eq!(TrainManager::load(&store).unwrap().data(), manager.data());

        let _ = std::fs::remove_file(&path);
    }
}
