//! Server-side sorting and paging of grid rows

use super::dto::{DataSourceRequest, DataSourceResult};
use crate::api::rest::dto::DeveloperDto;
use std::cmp::Ordering;
use std::str::FromStr;

/// Sortable developer column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Address,
    DateOfBirth,
}

/// Parsed `field-dir` sort descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDescriptor {
    pub field: SortField,
    pub descending: bool,
}

impl FromStr for SortDescriptor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, dir) = s
            .rsplit_once('-')
            .ok_or_else(|| format!("Invalid sort descriptor '{s}'"))?;

        let field = match field {
            "name" => SortField::Name,
            "address" => SortField::Address,
            "date_of_birth" => SortField::DateOfBirth,
            other => return Err(format!("Unknown sort field '{other}'")),
        };
        let descending = match dir {
            "asc" => false,
            "desc" => true,
            other => return Err(format!("Unknown sort direction '{other}'")),
        };

        Ok(Self { field, descending })
    }
}

impl SortDescriptor {
    fn compare(&self, a: &DeveloperDto, b: &DeveloperDto) -> Ordering {
        let ord = match self.field {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Address => a.address.cmp(&b.address),
            SortField::DateOfBirth => a.date_of_birth.cmp(&b.date_of_birth),
        };
        if self.descending {
            ord.reverse()
        } else {
            ord
        }
    }
}

/// Sort and page `rows` according to the grid request.
///
/// `total` is the size of the unpaged set. A missing or zero page size falls
/// back to `default_page_size`; pages start at 1.
pub fn to_data_source_result(
    mut rows: Vec<DeveloperDto>,
    request: &DataSourceRequest,
    default_page_size: u64,
) -> Result<DataSourceResult<DeveloperDto>, String> {
    if let Some(sort) = request.sort.as_deref().filter(|s| !s.is_empty()) {
        let descriptor: SortDescriptor = sort.parse()?;
        rows.sort_by(|a, b| descriptor.compare(a, b));
    }

    let total = rows.len() as u64;
    let page_size = request
        .page_size
        .filter(|size| *size > 0)
        .unwrap_or(default_page_size)
        .max(1);
    let page = request.page.unwrap_or(1).max(1);

    let skip = usize::try_from((page - 1).saturating_mul(page_size)).unwrap_or(usize::MAX);
    let take = usize::try_from(page_size).unwrap_or(usize::MAX);
    let data = rows.into_iter().skip(skip).take(take).collect();

    Ok(DataSourceResult { data, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn row(name: &str, address: &str, year: i32) -> DeveloperDto {
        DeveloperDto {
            id: Uuid::new_v4(),
            name: name.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            address: address.to_string(),
            accounts: None,
            department_id: Some(1),
            department: None,
        }
    }

    fn names(result: &DataSourceResult<DeveloperDto>) -> Vec<&str> {
        result.data.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_parse_sort_descriptor() {
        let parsed: SortDescriptor = "date_of_birth-desc".parse().unwrap();
        assert_eq!(parsed.field, SortField::DateOfBirth);
        assert!(parsed.descending);

        assert!("name".parse::<SortDescriptor>().is_err());
        assert!("salary-asc".parse::<SortDescriptor>().is_err());
        assert!("name-up".parse::<SortDescriptor>().is_err());
    }

    #[test]
    fn test_sort_then_page() {
        let rows = vec![
            row("Carol", "3 C St", 1980),
            row("Alice", "1 A St", 1990),
            row("Bob", "2 B St", 1970),
        ];
        let request = DataSourceRequest {
            page: Some(1),
            page_size: Some(2),
            sort: Some("date_of_birth-asc".to_string()),
        };

        let result = to_data_source_result(rows, &request, 5).unwrap();
        assert_eq!(result.total, 3);
        assert_eq!(names(&result), vec!["Bob", "Carol"]);
    }

    #[test]
    fn test_default_page_size_and_last_page() {
        let rows: Vec<_> = (0..7).map(|i| row(&format!("Dev{i}"), "x", 1990)).collect();
        let request = DataSourceRequest {
            page: Some(2),
            page_size: None,
            sort: Some("name-desc".to_string()),
        };

        let result = to_data_source_result(rows, &request, 5).unwrap();
        assert_eq!(result.total, 7);
        assert_eq!(names(&result), vec!["Dev1", "Dev0"]);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let rows = vec![row("Alice", "x", 1990)];
        let request = DataSourceRequest {
            page: Some(4),
            page_size: Some(10),
            sort: None,
        };

        let result = to_data_source_result(rows, &request, 5).unwrap();
        assert_eq!(result.total, 1);
        assert!(result.data.is_empty());
    }
}
