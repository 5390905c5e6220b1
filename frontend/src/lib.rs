extern crate web_sys;
extern crate wasm_bindgen;

mod to_elem;
mod form;

use seed::{*, prelude::*};

use form::{FormMsg, FormSt};

pub struct Model {
    form: FormSt,
}

#[derive(Clone,Debug)]
pub enum Msg {
    Form(FormMsg),
}

fn update(msg: Msg, model: &mut Model, _orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::Form(ref msg) => model.form.update_state(msg),
    }
}

fn navbar() -> Node<Msg> {
    nav![
        class!["navbar", "navbar-dark", "bg-dark"],
        span![class!["navbar-brand"], "clue"],
    ]
}

fn view(model: &Model) -> impl View<Msg> {
    vec![
        navbar(),
        div![
            class!["container-fluid"],
            div![
                class!["row"],
                div![class!["col"], model.form.view()],
                div![class!["col-sm-5"]],
            ],
        ],
    ]
}

fn after_mount(_url: Url, _orders: &mut impl Orders<Msg>) -> AfterMount<Model> {
    log!("Starting...");
    AfterMount::new(Model { form: FormSt::new() })
}

#[wasm_bindgen(start)]
pub fn render() {
    App::builder(update, view)
        .after_mount(after_mount)
        .build_and_start();
}
