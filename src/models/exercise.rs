//! Practice exercises offered by the lab site.

use serde::Serialize;

/// How hard an exercise is. Serialized as the capitalized name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub id: u32,
    pub title: &'static str,
    pub difficulty: Difficulty,
    pub description: &'static str,
}

static CATALOG: [Exercise; 3] = [
    Exercise {
        id: 1,
        title: "Hello World",
        difficulty: Difficulty::Beginner,
        description: "Print \"Hello, World!\" to the console",
    },
    Exercise {
        id: 2,
        title: "Data Analysis with Pandas",
        difficulty: Difficulty::Intermediate,
        description: "Analyze a CSV dataset using pandas",
    },
    Exercise {
        id: 3,
        title: "Machine Learning Classification",
        difficulty: Difficulty::Advanced,
        description: "Build a classification model using scikit-learn",
    },
];

/// The fixed exercise catalog, ordered by id.
pub fn catalog() -> &'static [Exercise] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalog_ids_in_order() {
        let ids: Vec<u32> = catalog().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_exercise_serialization() {
        let value = serde_json::to_value(&catalog()[0]).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "title": "Hello World",
                "difficulty": "Beginner",
                "description": "Print \"Hello, World!\" to the console"
            })
        );
    }

    #[test]
    fn test_difficulty_matches_serialized_name() {
        for exercise in catalog() {
            let value = serde_json::to_value(exercise.difficulty).unwrap();
            assert_eq!(value, exercise.difficulty.as_str());
        }
    }
}
