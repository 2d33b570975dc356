//! Outbound seams to the map, the workout list and the alert box.

use crate::{
    render::{MarkerView, WorkoutRow},
    workout::Coordinates,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanRequest {
    pub center: Coordinates,
    pub zoom: f64,
    pub animate: bool,
    pub pan_duration_secs: f64,
}

pub trait MapSurface {
    fn add_marker(&mut self, marker: &MarkerView);
    fn center_on(&mut self, request: PanRequest);
}

pub trait ListSurface {
    fn insert_row(&mut self, row: WorkoutRow);
}

pub trait AlertSurface {
    fn alert(&mut self, message: &str);
}
