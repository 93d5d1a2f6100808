//! Todo List Component
//!
//! Loads the list on mount and renders it according to the query phase.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{NewTodoForm, TodoItem};
use crate::context::AppContext;
use crate::list_view::{item_views, row_key, Frame, ERROR_TEXT, HEADING_TEXT, LOADING_TEXT};
use crate::store::{TodoListState, TodoListStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let state = Store::new(TodoListState::new());
    let controller = ctx.controller(state);

    // Load todos on mount
    let loader = controller.clone();
    spawn_local(async move {
        loader.load().await;
    });

    // Memos keep typing in the form from rebuilding the frame
    let frame = Memo::new(move |_| state.phase().with(|phase| Frame::from(phase)));
    let items = Memo::new(move |_| state.todos().with(|todos| item_views(todos)));

    move || match frame.get() {
        Frame::Loading => view! { <div>{LOADING_TEXT}</div> }.into_any(),
        Frame::Error => view! { <div>{ERROR_TEXT}</div> }.into_any(),
        Frame::Hidden => ().into_any(),
        Frame::List => {
            let form_controller = controller.clone();
            let item_controller = controller.clone();
            view! {
                <div class="todo-list p-5 border rounded">
                    {HEADING_TEXT}
                    <NewTodoForm controller=form_controller />
                    <ul class="mt-5">
                        <For
                            each=move || items.get().into_iter().enumerate()
                            key=|(index, item)| row_key(*index, item)
                            children=move |(_, item)| {
                                view! { <TodoItem item=item controller=item_controller.clone() /> }
                            }
                        />
                    </ul>
                </div>
            }
            .into_any()
        }
    }
}
