use super::{StopFacility, StopFacilityId, TransitLine, TransitLineId};
use crate::model::MatsimError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// the transit side of a scenario: stop facilities plus the lines serving
/// them. the schedule owns both collections; routes reference facilities
/// by id only.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct TransitSchedule {
    stop_facilities: IndexMap<StopFacilityId, StopFacility>,
    lines: IndexMap<TransitLineId, TransitLine>,
}

impl TransitSchedule {
    pub fn empty() -> TransitSchedule {
        TransitSchedule::default()
    }

    pub fn add_stop_facility(&mut self, facility: StopFacility) -> Result<(), MatsimError> {
        if self.stop_facilities.contains_key(&facility.id) {
            return Err(MatsimError::DuplicateId(
                "stop facility",
                facility.id.to_string(),
            ));
        }
        self.stop_facilities.insert(facility.id.clone(), facility);
        Ok(())
    }

    /// helper with error handling for getting a registered stop facility
    pub fn get_stop_facility(&self, id: &StopFacilityId) -> Result<&StopFacility, MatsimError> {
        self.stop_facilities
            .get(id)
            .ok_or_else(|| MatsimError::MissingStopFacility(id.to_string()))
    }

    pub fn add_line(&mut self, line: TransitLine) -> Result<(), MatsimError> {
        if self.lines.contains_key(&line.id) {
            return Err(MatsimError::DuplicateId("transit line", line.id.to_string()));
        }
        self.lines.insert(line.id.clone(), line);
        Ok(())
    }

    pub fn stop_facilities(&self) -> impl Iterator<Item = &StopFacility> {
        self.stop_facilities.values()
    }

    pub fn lines(&self) -> impl Iterator<Item = &TransitLine> {
        self.lines.values()
    }

    pub fn n_stop_facilities(&self) -> usize {
        self.stop_facilities.len()
    }

    pub fn n_lines(&self) -> usize {
        self.lines.len()
    }
}
