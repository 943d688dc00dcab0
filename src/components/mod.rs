mod modal;

pub use modal::Modal;

use yew::prelude::*;

/// Dismissal policy for state-changing modals. While a mutation is in
/// flight every close path is suppressed; an allowed close always resyncs
/// the owning list, since a mutation that failed ambiguously may still have
/// committed server-side.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Dismissal {
    Suppressed,
    CloseAndResync,
}

pub fn dismissal(busy: bool) -> Dismissal {
    if busy {
        Dismissal::Suppressed
    } else {
        Dismissal::CloseAndResync
    }
}

pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

/// Standard status row for a table body: loading when nothing is cached yet,
/// or an empty-collection note.
pub fn table_status_row(colspan: &'static str, message: Html) -> Html {
    html! {
        <tr><td colspan={colspan} class="px-8 py-6 text-center text-muted-foreground">{ message }</td></tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_in_flight_mutation_suppresses_every_close_path() {
        assert_eq!(dismissal(true), Dismissal::Suppressed);
    }

    #[test]
    fn an_idle_state_changing_modal_closes_and_resyncs() {
        // Cancelling after a failed mutation still resyncs; the failure may
        // have committed server-side.
        assert_eq!(dismissal(false), Dismissal::CloseAndResync);
    }
}
