/// Typed result rows for the registrar queries

#[derive(Debug, Clone)]
pub struct ClassRow {
    pub classid: i64,
    pub dept: String,
    pub coursenum: String,
    pub area: String,
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct DetailRow {
    pub courseid: i64,
    pub days: String,
    pub starttime: String,
    pub endtime: String,
    pub bldg: String,
    pub roomnum: String,
    pub dept: String,
    pub coursenum: String,
    pub area: String,
    pub title: String,
    pub descrip: String,
    pub prereqs: String,
    pub profname: Option<String>, // NULL when the course has no professor link
}

/// Aggregate of all detail rows for one class.
#[derive(Debug, Clone)]
pub struct ClassDetails {
    pub courseid: i64,
    pub days: String,
    pub starttime: String,
    pub endtime: String,
    pub bldg: String,
    pub roomnum: String,
    pub area: String,
    pub title: String,
    pub descrip: String,
    pub prereqs: String,
    /// Distinct "DEPT num" pairs, first-seen order.
    pub listings: Vec<String>,
    /// Distinct professor names, sorted; empty when the course has none.
    pub professors: Vec<String>,
}

impl ClassDetails {
    /// Collapses the cross-listing and professor rows returned for one
    /// class. Returns `None` for an empty row set, the "no such class"
    /// signal.
    pub fn from_rows(rows: &[DetailRow]) -> Option<Self> {
        let first = rows.first()?;

        let mut listings: Vec<String> = Vec::new();
        let mut professors = std::collections::BTreeSet::new();
        for row in rows {
            let listing = format!("{} {}", row.dept, row.coursenum);
            if !listings.contains(&listing) {
                listings.push(listing);
            }
            if let Some(name) = &row.profname {
                professors.insert(name.clone());
            }
        }

        Some(ClassDetails {
            courseid: first.courseid,
            days: first.days.clone(),
            starttime: first.starttime.clone(),
            endtime: first.endtime.clone(),
            bldg: first.bldg.clone(),
            roomnum: first.roomnum.clone(),
            area: first.area.clone(),
            title: first.title.clone(),
            descrip: first.descrip.clone(),
            prereqs: first.prereqs.clone(),
            listings,
            professors: professors.into_iter().collect(),
        })
    }
}
