use workout_tracker_lib::{render::WorkoutRow, surface::ListSurface};
use yew::prelude::*;

/// Rendered rows, newest first.
#[derive(Debug, Default)]
pub struct RowBuffer {
    rows: Vec<WorkoutRow>,
}

impl RowBuffer {
    pub fn rows(&self) -> &[WorkoutRow] {
        &self.rows
    }
}

impl ListSurface for RowBuffer {
    fn insert_row(&mut self, row: WorkoutRow) {
        self.rows.insert(0, row);
    }
}

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutListProps {
    pub rows: Vec<WorkoutRow>,
}

#[function_component]
pub fn WorkoutList(props: &WorkoutListProps) -> Html {
    html! {
        <>
        { for props.rows.iter().map(|row| html! {
            <li key={row.id.to_string()} class={row.class_name()} data-id={row.id.to_string()}>
                <h2 class="workout__title">{ row.title.clone() }</h2>
                { for row.details.iter().map(|detail| html! {
                    <div class="workout__details">
                        <span class="workout__icon">{ detail.icon }</span>
                        <span class="workout__value">{ detail.value.clone() }</span>
                        <span class="workout__unit">{ detail.unit }</span>
                    </div>
                }) }
            </li>
        }) }
        </>
    }
}
