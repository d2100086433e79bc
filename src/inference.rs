use anyhow::{anyhow, bail, Result};
use serde_json::{Number, Value};

use crate::models::FeatureRecord;

// Coefficients du modèle linéaire: result = 3*age - 2*income
const AGE_WEIGHT: i64 = 3;
const INCOME_WEIGHT: i64 = 2;

pub const EXPECTED_INPUT: &str = r#"Expected JSON input:
{
    "age" : NUMBER
    "income" : NUMBER
}
"#;

/// Évalue le modèle sur un enregistrement validé.
///
/// Les opérandes entiers produisent un résultat entier, tout opérande
/// flottant bascule le calcul en f64.
pub fn predict(record: &FeatureRecord) -> Result<Number> {
    let age = numeric(&record.age, "age")?;
    let income = numeric(&record.income, "income")?;

    if let (Some(a), Some(i)) = (age.as_i64(), income.as_i64()) {
        let exact = AGE_WEIGHT
            .checked_mul(a)
            .and_then(|x| INCOME_WEIGHT.checked_mul(i).and_then(|y| x.checked_sub(y)));
        // En cas de dépassement, on retombe sur le calcul flottant
        if let Some(result) = exact {
            return Ok(Number::from(result));
        }
    }

    let result = AGE_WEIGHT as f64 * as_f64(age) - INCOME_WEIGHT as f64 * as_f64(income);
    Number::from_f64(result)
        .ok_or_else(|| anyhow!("Résultat non représentable en JSON: {}", result))
}

fn numeric<'a>(value: &'a Option<Value>, name: &str) -> Result<&'a Number> {
    match value {
        Some(Value::Number(n)) => Ok(n),
        Some(other) => bail!("Valeur non numérique pour '{}': {}", name, other),
        None => bail!("Clé '{}' absente de l'enregistrement", name),
    }
}

fn as_f64(n: &Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}
