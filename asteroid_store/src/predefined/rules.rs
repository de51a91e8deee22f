//! Ordered rule table for the predefined question menu
//!
//! Each rule pairs the substrings that must all appear in the lower-cased
//! question with a fixed, parameterless SQL template. Resolution is a
//! first-match linear scan, so order is load-bearing: an earlier rule
//! shadows any later rule whose substring set also matches.

/// One entry of the ordered rule table
#[derive(Debug)]
pub struct QuestionRule {
    /// Short label for logs and display
    pub label: &'static str,
    /// Substrings that must all appear in the lower-cased question
    pub keywords: &'static [&'static str],
    /// Fixed SQL template; no user input ever flows into it
    pub sql: &'static str,
}

impl QuestionRule {
    /// True when every keyword appears in the already-lower-cased question
    pub fn matches(&self, normalized_question: &str) -> bool {
        self.keywords
            .iter()
            .all(|keyword| normalized_question.contains(keyword))
    }
}

/// First-match-wins rule table, scanned in declaration order
pub static RULES: &[QuestionRule] = &[
    QuestionRule {
        label: "approach-count-per-asteroid",
        keywords: &["approach", "count"],
        sql: "SELECT a.name, COUNT(c.neo_list_id) AS approach_count
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_list_id
GROUP BY a.name",
    },
    QuestionRule {
        label: "average-velocity-per-asteroid",
        keywords: &["velocity", "average"],
        sql: "SELECT a.name, AVG(c.relative_velocity) AS avg_velocity
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_list_id
GROUP BY a.name",
    },
    QuestionRule {
        label: "top-10-fastest",
        keywords: &["top 10", "fastest"],
        sql: "SELECT a.name, MAX(c.relative_velocity) AS max_velocity
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_list_id
GROUP BY a.name
ORDER BY max_velocity DESC
LIMIT 10",
    },
    QuestionRule {
        label: "hazardous-with-over-3-approaches",
        keywords: &["hazardous", "more than 3"],
        sql: "SELECT a.name, COUNT(c.neo_list_id) AS approach_count
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_list_id
WHERE a.is_potentially_hazardous_asteroid = 'Yes'
GROUP BY a.name
HAVING COUNT(c.neo_list_id) > 3",
    },
    QuestionRule {
        label: "busiest-month",
        keywords: &["most approaches"],
        sql: "SELECT EXTRACT(MONTH FROM c.close_approach_date)::int AS month, COUNT(*) AS approach_count
FROM close_approach c
GROUP BY month
ORDER BY approach_count DESC
LIMIT 1",
    },
    QuestionRule {
        label: "fastest-ever-approach",
        keywords: &["fastest ever"],
        sql: "SELECT a.name, MAX(c.relative_velocity) AS max_velocity
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_list_id
GROUP BY a.name
ORDER BY max_velocity DESC
LIMIT 1",
    },
    QuestionRule {
        label: "largest-diameter",
        keywords: &["largest diameter"],
        sql: "SELECT a.name, MAX(a.estimated_diameter_max) AS max_diameter
FROM asteroids a
GROUP BY a.name
ORDER BY max_diameter DESC",
    },
    QuestionRule {
        label: "approaches-by-date-and-distance",
        keywords: &["closer over time"],
        sql: "SELECT a.name, c.close_approach_date, c.miss_distance_km
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_list_id
ORDER BY c.close_approach_date ASC, c.miss_distance_km ASC",
    },
    QuestionRule {
        label: "velocity-over-50000",
        keywords: &["approaches velocity"],
        sql: "SELECT a.name, c.close_approach_date, c.relative_velocity
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_list_id
WHERE c.relative_velocity > 50000",
    },
    QuestionRule {
        label: "highest-brightness",
        keywords: &["highest brightness"],
        sql: "SELECT a.name, MIN(a.absolute_magnitude_h) AS brightest
FROM asteroids a
GROUP BY a.name
ORDER BY brightest ASC
LIMIT 1",
    },
    QuestionRule {
        label: "hazardous-vs-non-hazardous",
        keywords: &["hazardous count"],
        sql: "SELECT a.is_potentially_hazardous_asteroid, COUNT(*) AS count
FROM asteroids a
GROUP BY a.is_potentially_hazardous_asteroid",
    },
    QuestionRule {
        label: "closer-than-the-moon",
        keywords: &["moon distance"],
        sql: "SELECT a.name, c.close_approach_date, c.miss_distance_km
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_list_id
WHERE c.miss_distance_km < 384400",
    },
    QuestionRule {
        // Threshold compares the km column against 0.05 with no unit
        // conversion, matching the stored behavior of the dashboard.
        label: "within-0.05-au",
        keywords: &["0.05 au"],
        sql: "SELECT a.name, c.close_approach_date, c.miss_distance_km
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_list_id
WHERE c.miss_distance_km < 0.05",
    },
    QuestionRule {
        // Unreachable: the "0.05 au" rule above already matches every
        // question containing this phrase. Kept so the table mirrors the
        // published menu.
        label: "closer-than-0.05-au",
        keywords: &["closer than 0.05 au"],
        sql: "SELECT a.name, c.close_approach_date, c.miss_distance_km
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_list_id
WHERE c.miss_distance_km < 0.05",
    },
    QuestionRule {
        label: "diameter-over-1-km",
        keywords: &["diameter greater than 1 km"],
        sql: "SELECT a.name, a.estimated_diameter_min, a.estimated_diameter_max
FROM asteroids a
WHERE a.estimated_diameter_min > 1 OR a.estimated_diameter_max > 1",
    },
    QuestionRule {
        label: "highest-miss-distance",
        keywords: &["highest miss distance"],
        sql: "SELECT a.name, MAX(c.miss_distance_km) AS max_miss_distance
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_list_id
GROUP BY a.name
ORDER BY max_miss_distance DESC
LIMIT 1",
    },
    QuestionRule {
        label: "future-approaches",
        keywords: &["close approach in future"],
        sql: "SELECT a.name, c.close_approach_date
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_list_id
WHERE c.close_approach_date > NOW()",
    },
    QuestionRule {
        label: "velocity-between-20k-and-100k",
        keywords: &["relative velocity between"],
        sql: "SELECT a.name, c.relative_velocity
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_list_id
WHERE c.relative_velocity BETWEEN 20000 AND 100000",
    },
];

/// The dashboard's question menu, in display order
pub const QUESTION_CATALOG: [&str; 20] = [
    "Count how many times each asteroid has approached Earth",
    "Average velocity of each asteroid over multiple approaches",
    "List top 10 fastest asteroids",
    "Find potentially hazardous asteroids that have approached Earth more than 3 times",
    "Find the month with the most asteroid approaches",
    "Get the asteroid with the fastest ever approach speed",
    "Sort asteroids by maximum estimated diameter (descending)",
    "Asteroids whose closest approach is getting nearer over time",
    "Display the name of each asteroid along with the date and miss distance of its closest approach to Earth",
    "List names of asteroids that approached Earth with velocity > 50,000 km/h",
    "Count how many approaches happened per month",
    "Find asteroid with the highest brightness (lowest magnitude value)",
    "Get number of hazardous vs non-hazardous asteroids",
    "Find asteroids that passed closer than the Moon (lesser than 1 LD), along with their close approach date and distance",
    "Find asteroids that came within 0.05 AU (astronomical distance)",
    "Find asteroids that passed closer than 0.05 AU (astronomical unit)",
    "List the name and estimated diameter of asteroids that have a diameter greater than 1 km",
    "Find the asteroid with the highest miss distance during its closest approach",
    "List all asteroids that have a close approach date in the future",
    "Find asteroids with a relative velocity between 20,000 km/h and 100,000 km/h",
];
