use gloo_console::error;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use workout_tracker_lib::{
    form::{FormDraft, FormField},
    WorkoutKind,
};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutFormProps {
    pub open: bool,
    /// Hidden without transition right after a submit.
    pub settling: bool,
    pub draft: FormDraft,
    pub secondary: FormField,
    pub distance_ref: NodeRef,
    pub on_type_change: Callback<WorkoutKind>,
    pub on_input: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component]
pub fn WorkoutForm(props: &WorkoutFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let onkeydown = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_cancel.emit(());
            }
        })
    };

    let onchange = {
        let on_type_change = props.on_type_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<WorkoutKind>() {
                Ok(kind) => on_type_change.emit(kind),
                Err(err) => error!(err.to_string()),
            }
        })
    };

    let row = |field: FormField, label: &'static str, placeholder: &'static str| {
        let on_input = props.on_input.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit((field, input.value()));
        });
        let hidden = match field {
            FormField::Cadence | FormField::Elevation => field != props.secondary,
            FormField::Distance | FormField::Duration => false,
        };
        let node_ref = if field == FormField::Distance { props.distance_ref.clone() } else { NodeRef::default() };

        html! {
            <div class={classes!("form__row", hidden.then_some("form__row--hidden"))}>
                <label class="form__label">{ label }</label>
                <input
                    ref={node_ref}
                    class={format!("form__input form__input--{field}")}
                    placeholder={placeholder}
                    value={props.draft.field(field).to_owned()}
                    {oninput}
                />
            </div>
        }
    };

    html! {
        <form
            class={classes!("form", (!props.open).then_some("hidden"))}
            style={props.settling.then_some("display: none")}
            {onsubmit}
            {onkeydown}
        >
            <div class="form__row">
                <label class="form__label">{ "Type" }</label>
                <select class="form__input form__input--type" {onchange}>
                    { for WorkoutKind::ALL.iter().map(|kind| html! {
                        <option value={kind.slug()} selected={*kind == props.draft.kind}>{ kind.label() }</option>
                    }) }
                </select>
            </div>
            { row(FormField::Distance, "Distance", "km") }
            { row(FormField::Duration, "Duration", "min") }
            { row(FormField::Cadence, "Cadence", "step/min") }
            { row(FormField::Elevation, "Elev Gain", "meters") }
            <button class="form__btn">{ "OK" }</button>
        </form>
    }
}
