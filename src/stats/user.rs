use crate::data::model::TripDataset;

use super::frequency::ValueCounts;

/// Gender and birth-year breakdown, only for cities that export it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    pub genders: ValueCounts<String>,
    pub earliest_birth_year: Option<i32>,
    pub most_recent_birth_year: Option<i32>,
    pub most_common_birth_year: Option<i32>,
}

/// Rider breakdown for a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: ValueCounts<String>,
    /// `None` when the dataset's city has no demographic columns.
    pub demographics: Option<Demographics>,
}

pub fn user_stats(dataset: &TripDataset) -> UserStats {
    let trips = &dataset.trips;
    let user_types = ValueCounts::from_values(trips.iter().filter_map(|t| t.user_type.clone()));

    let demographics = dataset.city.has_demographics().then(|| {
        let years: Vec<i32> = trips.iter().filter_map(|t| t.birth_year).collect();
        Demographics {
            genders: ValueCounts::from_values(trips.iter().filter_map(|t| t.gender.clone())),
            earliest_birth_year: years.iter().min().copied(),
            most_recent_birth_year: years.iter().max().copied(),
            most_common_birth_year: ValueCounts::from_values(years.iter().copied()).mode().copied(),
        }
    });

    UserStats {
        user_types,
        demographics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::trip;
    use crate::data::model::{City, TripRecord};

    fn rider(city: City, user_type: &str, gender: Option<&str>, year: Option<i32>) -> TripRecord {
        let mut t = trip(city, (2017, 5, 1), 12, 60.0);
        t.user_type = Some(user_type.into());
        t.gender = gender.map(Into::into);
        t.birth_year = year;
        t
    }

    #[test]
    fn counts_types_genders_and_years() {
        let ds = TripDataset::new(
            City::Chicago,
            vec![
                rider(City::Chicago, "Subscriber", Some("Male"), Some(1992)),
                rider(City::Chicago, "Subscriber", Some("Female"), Some(1992)),
                rider(City::Chicago, "Customer", None, None),
                rider(City::Chicago, "Subscriber", Some("Male"), Some(1981)),
                rider(City::Chicago, "Subscriber", Some("Male"), Some(2001)),
            ],
        );
        let stats = user_stats(&ds);

        let types: Vec<_> = stats.user_types.iter().map(|(v, n)| (v.as_str(), n)).collect();
        assert_eq!(types, vec![("Subscriber", 4), ("Customer", 1)]);

        let demo = stats.demographics.expect("chicago has demographics");
        let genders: Vec<_> = demo.genders.iter().map(|(v, n)| (v.as_str(), n)).collect();
        assert_eq!(genders, vec![("Male", 3), ("Female", 1)]);
        assert_eq!(demo.earliest_birth_year, Some(1981));
        assert_eq!(demo.most_recent_birth_year, Some(2001));
        assert_eq!(demo.most_common_birth_year, Some(1992));
    }

    #[test]
    fn washington_skips_demographics() {
        let ds = TripDataset::new(
            City::Washington,
            vec![rider(City::Washington, "Customer", None, None)],
        );
        let stats = user_stats(&ds);
        assert!(stats.demographics.is_none());
        assert_eq!(stats.user_types.mode().map(String::as_str), Some("Customer"));
    }

    #[test]
    fn demographics_present_iff_city_has_them() {
        for city in City::ALL {
            let stats = user_stats(&TripDataset::new(city, Vec::new()));
            assert_eq!(stats.demographics.is_some(), city.has_demographics());
        }
    }

    #[test]
    fn empty_dataset_has_no_years() {
        let stats = user_stats(&TripDataset::new(City::NewYorkCity, Vec::new()));
        let demo = stats.demographics.unwrap();
        assert!(demo.genders.is_empty());
        assert_eq!(demo.earliest_birth_year, None);
        assert_eq!(demo.most_recent_birth_year, None);
        assert_eq!(demo.most_common_birth_year, None);
    }
}
