#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::features::ubigeo::index::DatasetIndex;
#[cfg(test)]
use crate::features::ubigeo::models::{Dataset, Municipality, Parish, State};
#[cfg(test)]
use crate::features::ubigeo::UbigeoService;

#[cfg(test)]
pub fn parish(code: &str, name: &str, alternate_names: &[&str]) -> Parish {
    Parish {
        code: code.to_string(),
        name: name.to_string(),
        alternate_names: alternate_names.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
pub fn municipality(
    code: &str,
    name: &str,
    alternate_names: &[&str],
    parishes: Vec<Parish>,
) -> Municipality {
    Municipality {
        code: code.to_string(),
        name: name.to_string(),
        alternate_names: alternate_names.iter().map(|s| s.to_string()).collect(),
        parishes,
    }
}

#[cfg(test)]
pub fn state(code: &str, name: &str, municipalities: Vec<Municipality>) -> State {
    State {
        code: code.to_string(),
        name: name.to_string(),
        municipalities,
    }
}

/// Small dataset mixing both municipality code forms ("0701" and "010100")
#[cfg(test)]
pub fn sample_dataset() -> Dataset {
    Dataset {
        states: vec![
            state(
                "01",
                "Distrito Capital",
                vec![municipality(
                    "010100",
                    "Libertador",
                    &["Caracas"],
                    vec![
                        parish("010101", "Altagracia", &[]),
                        parish("010102", "Antímano", &[]),
                    ],
                )],
            ),
            state(
                "07",
                "Táchira",
                vec![
                    municipality(
                        "0701",
                        "Cárdenas",
                        &["Tachira Capital"],
                        vec![
                            parish("070101", "Cárdenas", &[]),
                            parish("070102", "Amenodoro Ángel Lamus", &["Amenodoro Rangel Lamus"]),
                        ],
                    ),
                    municipality(
                        "0702",
                        "Andrés Bello",
                        &[],
                        vec![parish("070201", "Cordero", &[])],
                    ),
                ],
            ),
            state(
                "17",
                "Nueva Esparta",
                vec![municipality(
                    "1701",
                    "Antolín del Campo",
                    &[],
                    vec![parish("170101", "Antolín del Campo", &["La Plaza de Paraguachí"])],
                )],
            ),
        ],
    }
}

#[cfg(test)]
pub fn sample_index() -> Arc<DatasetIndex> {
    Arc::new(DatasetIndex::build(sample_dataset()).unwrap())
}

#[cfg(test)]
pub fn sample_service() -> Arc<UbigeoService> {
    Arc::new(UbigeoService::new(sample_index()))
}
