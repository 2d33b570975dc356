use chrono::Local;

use crate::{
    config::TrackerConfig,
    error::TrackerError,
    form::{FormController, FormField},
    navigation::{self, ClickTarget},
    render,
    source::{Clock, IdGenerator, SessionIds, SystemClock},
    surface::{AlertSurface, ListSurface, MapSurface, PanRequest},
    workout::{Coordinates, WorkoutId, WorkoutKind},
    workout_store::WorkoutStore,
};

/// Session state of the tracker and the surfaces it draws on. Every inbound
/// UI event maps to one `on_*` method.
pub struct WorkoutTracker<M, L, A> {
    config: TrackerConfig,
    map: Option<M>,
    list: L,
    alerts: A,
    form: FormController,
    store: WorkoutStore,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
    degraded_reason: Option<String>,
}

impl<M: MapSurface, L: ListSurface, A: AlertSurface> WorkoutTracker<M, L, A> {
    pub fn new(config: TrackerConfig, list: L, alerts: A) -> Self {
        Self::with_sources(
            config,
            list,
            alerts,
            Box::new(SessionIds::starting_at(Local::now())),
            Box::new(SystemClock),
        )
    }

    pub fn with_sources(
        config: TrackerConfig,
        list: L,
        alerts: A,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            config,
            map: None,
            list,
            alerts,
            form: FormController::new(),
            store: WorkoutStore::new(),
            ids,
            clock,
            degraded_reason: None,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    pub fn is_map_ready(&self) -> bool {
        self.map.is_some()
    }

    /// Why the map is not available, if the location could not be obtained.
    pub fn degraded_reason(&self) -> Option<&str> {
        self.degraded_reason.as_deref()
    }

    pub fn attach_map(&mut self, map: M) {
        tracing::info!("Map attached");
        self.map = Some(map);
        self.degraded_reason = None;
    }

    pub fn on_location_failed(&mut self, error: TrackerError) {
        tracing::warn!("Location unavailable: {error}");
        let message = error.to_string();
        self.alerts.alert(&message);
        self.degraded_reason = Some(message);
    }

    pub fn on_map_click(&mut self, at: Coordinates) -> Result<(), TrackerError> {
        if self.map.is_none() {
            return Err(TrackerError::MapUnavailable);
        }
        self.form.open(at);
        Ok(())
    }

    pub fn on_type_change(&mut self, kind: WorkoutKind) {
        self.form.select_kind(kind);
    }

    pub fn on_input(&mut self, field: FormField, raw: impl Into<String>) {
        self.form.set_field(field, raw);
    }

    pub fn on_cancel(&mut self) {
        self.form.cancel();
    }

    /// Records the workout described by the open form, then draws its marker
    /// and list row. Invalid input is alerted and leaves everything unchanged.
    pub fn on_submit(&mut self) -> Result<WorkoutId, TrackerError> {
        let now = self.clock.now();
        let workout = match self.form.submit(self.ids.as_mut(), now) {
            Ok(workout) => workout,
            Err(err @ TrackerError::InvalidWorkoutInput { .. }) => {
                tracing::debug!("Rejected workout input: {err:?}");
                self.alerts.alert(&err.to_string());
                return Err(err);
            }
            Err(err) => return Err(err),
        };

        let workout = self.store.add(workout);
        tracing::info!("Recorded workout {} ({})", workout.id(), workout.description());

        match self.map.as_mut() {
            Some(map) => map.add_marker(&render::marker_view(workout)),
            None => tracing::warn!("No map to draw workout {} on", workout.id()),
        }
        self.list.insert_row(render::workout_row(workout));

        Ok(workout.id().clone())
    }

    /// Pans the map to the workout whose row was clicked. Clicks outside a row
    /// do nothing.
    pub fn on_list_click(&mut self, target: &dyn ClickTarget) -> Option<Coordinates> {
        let workout = navigation::resolve(&self.store, target)?;
        let map = self.map.as_mut()?;

        let request = PanRequest {
            center: workout.coordinates(),
            zoom: self.config.zoom_level,
            animate: true,
            pan_duration_secs: self.config.pan_duration_secs,
        };
        tracing::debug!("Centering map on workout {}", workout.id());
        map.center_on(request);
        Some(request.center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        form::FormState,
        navigation::tests::Target,
        render::{MarkerView, WorkoutRow},
        source::tests::FixedClock,
        workout::tests::april_14,
    };

    #[derive(Default)]
    struct FakeMap {
        markers: Vec<MarkerView>,
        pans: Vec<PanRequest>,
    }

    impl MapSurface for FakeMap {
        fn add_marker(&mut self, marker: &MarkerView) {
            self.markers.push(marker.clone());
        }

        fn center_on(&mut self, request: PanRequest) {
            self.pans.push(request);
        }
    }

    #[derive(Default)]
    struct FakeList(Vec<WorkoutRow>);

    impl ListSurface for FakeList {
        fn insert_row(&mut self, row: WorkoutRow) {
            self.0.push(row);
        }
    }

    #[derive(Default)]
    struct FakeAlerts(Vec<String>);

    impl AlertSurface for FakeAlerts {
        fn alert(&mut self, message: &str) {
            self.0.push(message.to_owned());
        }
    }

    type Tracker = WorkoutTracker<FakeMap, FakeList, FakeAlerts>;

    fn tracker() -> Tracker {
        WorkoutTracker::with_sources(
            TrackerConfig::default(),
            FakeList::default(),
            FakeAlerts::default(),
            Box::new(SessionIds::new("test")),
            Box::new(FixedClock(april_14())),
        )
    }

    fn ready_tracker() -> Tracker {
        let mut tracker = tracker();
        tracker.attach_map(FakeMap::default());
        tracker
    }

    fn fill(tracker: &mut Tracker, kind: WorkoutKind, distance: &str, duration: &str, extra: &str) {
        tracker.on_type_change(kind);
        tracker.on_input(FormField::Distance, distance);
        tracker.on_input(FormField::Duration, duration);
        let field = match kind {
            WorkoutKind::Running => FormField::Cadence,
            WorkoutKind::Cycling => FormField::Elevation,
        };
        tracker.on_input(field, extra);
    }

    fn markers(tracker: &Tracker) -> &[MarkerView] {
        &tracker.map().unwrap().markers
    }

    #[test]
    fn running_submission_records_and_renders_once() {
        let mut tracker = ready_tracker();
        tracker.on_map_click(Coordinates::new(56.17, 10.19)).unwrap();
        fill(&mut tracker, WorkoutKind::Running, "5.2", "24", "178");

        let id = tracker.on_submit().unwrap();

        assert_eq!(tracker.store().len(), 1);
        let workout = tracker.store().find_by_id(id.as_str()).unwrap();
        assert!((workout.primary_metric() - 4.615).abs() < 1e-3);
        assert_eq!(workout.coordinates(), Coordinates::new(56.17, 10.19));

        assert_eq!(markers(&tracker).len(), 1);
        assert_eq!(markers(&tracker)[0].popup_text, "🏃‍♂️ Running on April 14");
        assert_eq!(tracker.list().0.len(), 1);
        assert_eq!(tracker.list().0[0].id, id);
        assert!(tracker.alerts.0.is_empty());
        assert_eq!(tracker.form().state(), FormState::Idle);
    }

    #[test]
    fn cycling_submission_computes_speed() {
        let mut tracker = ready_tracker();
        tracker.on_map_click(Coordinates::new(0., 0.)).unwrap();
        fill(&mut tracker, WorkoutKind::Cycling, "20", "60", "150");

        let id = tracker.on_submit().unwrap();

        let workout = tracker.store().find_by_id(id.as_str()).unwrap();
        assert_eq!(workout.primary_metric(), 20.);
        assert_eq!(tracker.list().0[0].details[2].value, "20.0");
    }

    #[test]
    fn invalid_submission_alerts_without_mutation() {
        let mut tracker = ready_tracker();
        tracker.on_map_click(Coordinates::new(1., 1.)).unwrap();
        fill(&mut tracker, WorkoutKind::Running, "-1", "10", "5");

        let result = tracker.on_submit();

        assert!(matches!(
            result,
            Err(TrackerError::InvalidWorkoutInput { field: FormField::Distance })
        ));
        assert!(tracker.store().is_empty());
        assert!(markers(&tracker).is_empty());
        assert!(tracker.list().0.is_empty());
        assert_eq!(tracker.alerts.0, ["Input must be a positive number."]);
        assert!(tracker.form().is_open());
        assert_eq!(tracker.form().draft().distance, "-1");
    }

    #[test]
    fn corrected_input_can_be_resubmitted() {
        let mut tracker = ready_tracker();
        tracker.on_map_click(Coordinates::new(1., 1.)).unwrap();
        fill(&mut tracker, WorkoutKind::Running, "-1", "10", "5");
        assert!(tracker.on_submit().is_err());

        tracker.on_input(FormField::Distance, "2");
        assert!(tracker.on_submit().is_ok());
        assert_eq!(tracker.store().len(), 1);
    }

    #[test]
    fn rapid_submissions_get_distinct_ids() {
        let mut tracker = ready_tracker();
        let mut ids = Vec::new();
        for _ in 0..5 {
            tracker.on_map_click(Coordinates::new(1., 1.)).unwrap();
            fill(&mut tracker, WorkoutKind::Running, "3", "15", "160");
            ids.push(tracker.on_submit().unwrap());
        }
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn map_click_before_map_is_guarded() {
        let mut tracker = tracker();

        assert!(matches!(
            tracker.on_map_click(Coordinates::new(1., 1.)),
            Err(TrackerError::MapUnavailable)
        ));
        assert!(!tracker.form().is_open());
        assert!(matches!(tracker.on_submit(), Err(TrackerError::FormClosed)));
    }

    #[test]
    fn location_failures_are_visible() {
        let mut tracker = tracker();
        tracker.on_location_failed(TrackerError::GeolocationUnavailable);

        assert_eq!(tracker.alerts.0.len(), 1);
        assert_eq!(tracker.degraded_reason(), Some(tracker.alerts.0[0].as_str()));
        assert!(!tracker.is_map_ready());

        tracker.attach_map(FakeMap::default());
        assert!(tracker.degraded_reason().is_none());
    }

    #[test]
    fn denied_location_alerts_browser_reason() {
        let mut tracker = tracker();
        tracker.on_location_failed(TrackerError::GeolocationDenied("User denied Geolocation".into()));

        assert_eq!(tracker.alerts.0.len(), 1);
        assert!(tracker.alerts.0[0].contains("User denied Geolocation"));
        assert_eq!(tracker.degraded_reason(), Some(tracker.alerts.0[0].as_str()));
        assert!(matches!(
            tracker.on_map_click(Coordinates::new(1., 1.)),
            Err(TrackerError::MapUnavailable)
        ));
    }

    #[test]
    fn list_click_centers_on_workout() {
        let mut tracker = ready_tracker();
        tracker.on_map_click(Coordinates::new(48.85, 2.35)).unwrap();
        fill(&mut tracker, WorkoutKind::Running, "5", "25", "170");
        tracker.on_submit().unwrap();
        tracker.on_map_click(Coordinates::new(51.5, -0.12)).unwrap();
        fill(&mut tracker, WorkoutKind::Cycling, "30", "70", "200");
        tracker.on_submit().unwrap();

        let centered = tracker.on_list_click(&Target(Some("test-1")));

        assert_eq!(centered, Some(Coordinates::new(48.85, 2.35)));
        let pans = &tracker.map().unwrap().pans;
        assert_eq!(
            pans[..],
            [PanRequest {
                center: Coordinates::new(48.85, 2.35),
                zoom: 13.,
                animate: true,
                pan_duration_secs: 1.,
            }]
        );
    }

    #[test]
    fn list_click_outside_rows_does_nothing() {
        let mut tracker = ready_tracker();
        tracker.on_map_click(Coordinates::new(1., 1.)).unwrap();
        fill(&mut tracker, WorkoutKind::Running, "5", "25", "170");
        tracker.on_submit().unwrap();

        assert_eq!(tracker.on_list_click(&Target(None)), None);
        assert_eq!(tracker.on_list_click(&Target(Some("missing"))), None);
        assert!(tracker.map().unwrap().pans.is_empty());
    }
}
