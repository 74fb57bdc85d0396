//! Query construction for the registrar database.
//!
//! All user-supplied filter text is normalized into LIKE patterns and bound
//! positionally. The only structural literal spliced into the generated SQL
//! is the ESCAPE clause itself.

use crate::error::RegError;

/// Optional substring filters for the list-mode search, combined with AND
/// semantics. Absent (or empty) fields are left out of the query entirely
/// rather than matching the empty string.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub dept: Option<String>,
    pub coursenum: Option<String>,
    pub area: Option<String>,
    pub title: Option<String>,
}

/// Detail lookup statement, one row per cross-listing and professor
/// combination. The LEFT JOINs keep classes whose course has no professor
/// link.
pub const DETAIL_SQL: &str = "SELECT classes.courseid, days, starttime, endtime, bldg, roomnum,
            dept, coursenum, area, title, descrip, prereqs, profname
     FROM classes
     INNER JOIN courses ON classes.courseid = courses.courseid
     INNER JOIN crosslistings ON classes.courseid = crosslistings.courseid
     LEFT JOIN coursesprofs ON classes.courseid = coursesprofs.courseid
     LEFT JOIN profs ON coursesprofs.profid = profs.profid
     WHERE classid = ?
     ORDER BY dept, coursenum";

/// Normalizes one filter value into a "contains" LIKE pattern: literal `%`
/// and `_` are escaped with `@`, the text is lowercased, embedded newlines
/// are dropped, and the result is wrapped in wildcards.
pub fn like_pattern(raw: &str) -> String {
    let escaped = raw
        .replace('%', "@%")
        .replace('_', "@_")
        .to_lowercase()
        .replace('\n', "");
    format!("%{escaped}%")
}

/// Builds the list-mode search statement and its positional parameters.
///
/// Filters are visited in a fixed column order (dept, coursenum, area,
/// title) so the WHERE clause layout and the parameter binding always
/// agree. With no filters the WHERE clause is omitted and every class is
/// returned.
pub fn build_search(filters: &SearchFilters) -> (String, Vec<String>) {
    let mut sql = String::from(
        "SELECT classid, dept, coursenum, area, title \
         FROM classes \
         INNER JOIN courses ON classes.courseid = courses.courseid \
         INNER JOIN crosslistings ON classes.courseid = crosslistings.courseid",
    );

    let columns = [
        ("dept", filters.dept.as_deref()),
        ("coursenum", filters.coursenum.as_deref()),
        ("area", filters.area.as_deref()),
        ("title", filters.title.as_deref()),
    ];

    let mut predicates: Vec<String> = Vec::new();
    let mut params: Vec<String> = Vec::new();
    for (column, value) in columns {
        match value {
            Some(value) if !value.is_empty() => {
                predicates.push(format!("{column} LIKE ? ESCAPE '@'"));
                params.push(like_pattern(value));
            }
            _ => {}
        }
    }

    if !predicates.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&predicates.join(" AND "));
    }
    sql.push_str(" ORDER BY dept, coursenum, classid");

    (sql, params)
}

/// Checks that a class id argument is a plain digit string. The id stays
/// text and is bound as such; the classid column's integer affinity
/// converts it during comparison.
pub fn validate_class_id(input: &str) -> Result<&str, RegError> {
    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        Ok(input)
    } else {
        Err(RegError::InvalidClassId {
            input: input.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("50%"), "%50@%%");
        assert_eq!(like_pattern("lab_1"), "%lab@_1%");
    }

    #[test]
    fn test_like_pattern_lowercases_and_drops_newlines() {
        assert_eq!(like_pattern("COS"), "%cos%");
        assert_eq!(like_pattern("intro\nto"), "%introto%");
    }

    #[test]
    fn test_build_search_without_filters_has_no_where() {
        let (sql, params) = build_search(&SearchFilters::default());
        assert!(!sql.contains("WHERE"));
        assert!(sql.ends_with("ORDER BY dept, coursenum, classid"));
        assert!(params.is_empty());
    }

    #[test]
    fn test_build_search_keeps_predicates_and_params_aligned() {
        let filters = SearchFilters {
            dept: Some("COS".into()),
            coursenum: Some("333".into()),
            area: Some("QR".into()),
            title: Some("Program".into()),
        };
        let (sql, params) = build_search(&filters);
        assert!(sql.contains(
            "WHERE dept LIKE ? ESCAPE '@' AND coursenum LIKE ? ESCAPE '@' \
             AND area LIKE ? ESCAPE '@' AND title LIKE ? ESCAPE '@'"
        ));
        assert_eq!(params, vec!["%cos%", "%333%", "%qr%", "%program%"]);
    }

    #[test]
    fn test_build_search_skips_absent_and_empty_filters() {
        let filters = SearchFilters {
            dept: Some(String::new()),
            title: Some("networks".into()),
            ..Default::default()
        };
        let (sql, params) = build_search(&filters);
        assert!(sql.contains("WHERE title LIKE ? ESCAPE '@' ORDER BY"));
        assert_eq!(params, vec!["%networks%"]);
    }

    #[test]
    fn test_validate_class_id_accepts_digit_strings() {
        assert_eq!(validate_class_id("8321").unwrap(), "8321");
        assert_eq!(validate_class_id("0").unwrap(), "0");
    }

    #[test]
    fn test_validate_class_id_rejects_non_digits() {
        assert!(matches!(
            validate_class_id("abc"),
            Err(RegError::InvalidClassId { .. })
        ));
        assert!(matches!(
            validate_class_id("83 21"),
            Err(RegError::InvalidClassId { .. })
        ));
        assert!(matches!(
            validate_class_id("-1"),
            Err(RegError::InvalidClassId { .. })
        ));
        assert!(matches!(
            validate_class_id(""),
            Err(RegError::InvalidClassId { .. })
        ));
    }
}
