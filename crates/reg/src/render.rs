//! Rendering for the two report styles: the fixed-width class table and
//! the multi-field class detail report.

use crate::db::{ClassDetails, ClassRow};
use textwrap::{fill, Options};

/// Maximum width of any rendered line.
const MAX_WIDTH: usize = 72;

const TABLE_HEADER: &str = "ClsId Dept CrsNum Area Title";
const TABLE_UNDERLINE: &str = "----- ---- ------ ---- -----";

/// Renders the list-mode table. Class id, dept, course number and area are
/// right-aligned; long rows wrap at 72 columns with continuation lines
/// indented to the title column, never splitting a word. An empty result
/// set renders the header and underline alone.
pub fn render_table(rows: &[ClassRow]) -> String {
    let mut out = String::new();
    out.push_str(TABLE_HEADER);
    out.push('\n');
    out.push_str(TABLE_UNDERLINE);
    out.push('\n');

    for row in rows {
        let line = format!(
            "{:>5} {:>4} {:>6} {:>4} {}",
            row.classid, row.dept, row.coursenum, row.area, row.title
        );
        let indent = " ".repeat(line.chars().count() - row.title.chars().count());
        let options = Options::new(MAX_WIDTH)
            .subsequent_indent(&indent)
            .break_words(false);
        out.push_str(&fill(&line, options));
        out.push('\n');
    }
    out
}

/// Renders the detail report for one class: identity, schedule and
/// location, distinct cross-listings, area, wrapped title, description and
/// prerequisites, then the professors block (omitted when the course has
/// none).
pub fn render_details(details: &ClassDetails) -> String {
    let mut out = String::new();

    out.push_str(&format!("Course Id: {}\n\n", details.courseid));

    out.push_str(&format!("Days: {}\n", details.days));
    out.push_str(&format!("Start time: {}\n", details.starttime));
    out.push_str(&format!("End time: {}\n", details.endtime));
    out.push_str(&format!("Building: {}\n", details.bldg));
    out.push_str(&format!("Room: {}\n\n", details.roomnum));

    for listing in &details.listings {
        out.push_str(&format!("Dept and Number: {listing}\n"));
    }
    out.push('\n');

    out.push_str(&format!("Area: {}\n\n", details.area));

    out.push_str(&fill(
        &format!("Title: {}", details.title),
        Options::new(MAX_WIDTH).break_words(false),
    ));
    out.push_str("\n\n");

    out.push_str(&fill(
        &format!("Description: {}", details.descrip),
        Options::new(MAX_WIDTH).break_words(false),
    ));
    out.push_str("\n\n");

    // An empty prerequisites field still gets its label line.
    if details.prereqs.is_empty() {
        out.push_str("Prerequisites:\n\n");
    } else {
        out.push_str(&fill(
            &format!("Prerequisites: {}", details.prereqs),
            Options::new(MAX_WIDTH).break_words(true),
        ));
        out.push_str("\n\n");
    }

    for professor in &details.professors {
        out.push_str(&format!("Professor: {professor}\n"));
    }

    out
}
