use leptos::prelude::*;

/// The brand mark: two chevrons around a red dot.
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <svg
            viewBox="0 0 154 114"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
            class="h-8 w-auto text-gray-900 dark:text-gray-100"
            aria-hidden="true"
        >
            <path
                d="M37 7L7 57L37 107"
                stroke="currentColor"
                stroke-width="14"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
            <path
                d="M117 7L147 57L117 107"
                stroke="currentColor"
                stroke-width="14"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
            <path
                d="M77 72C85.2843 72 92 65.2843 92 57C92 48.7157 85.2843 42 77 42C68.7157 42 62 48.7157 62 57C62 65.2843 68.7157 72 77 72Z"
                fill="#FF5252"
            />
        </svg>
    }
}

// Line icons share one 24x24 stroked frame.

#[component]
pub fn MenuIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" class="h-5 w-5">
            <path d="M4 12h16" />
            <path d="M4 6h16" />
            <path d="M4 18h16" />
        </svg>
    }
}

#[component]
pub fn CloseIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" class="h-4 w-4">
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        </svg>
    }
}

#[component]
pub fn MoonIcon() -> impl IntoView {
    view! {
        <svg data-testid="moon-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"
            class="h-5 w-5">
            <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" />
        </svg>
    }
}

#[component]
pub fn SunIcon() -> impl IntoView {
    view! {
        <svg data-testid="sun-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"
            class="h-5 w-5">
            <circle cx="12" cy="12" r="4" />
            <path d="M12 2v2" />
            <path d="M12 20v2" />
            <path d="m4.93 4.93 1.41 1.41" />
            <path d="m17.66 17.66 1.41 1.41" />
            <path d="M2 12h2" />
            <path d="M20 12h2" />
            <path d="m6.34 17.66-1.41 1.41" />
            <path d="m19.07 4.93-1.41 1.41" />
        </svg>
    }
}
