pub const CONTAINER: &str = "container mx-auto px-6 py-10 max-w-6xl";

pub const CARD: &str = "bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-2xl shadow p-6";
pub const PRODUCT_GRID: &str = "grid gap-6 sm:grid-cols-2 lg:grid-cols-3";
pub const TOAST: &str = "hidden fixed bottom-5 right-5 w-full max-w-xs p-4 text-gray-500 bg-white rounded-lg shadow dark:text-gray-400 dark:bg-gray-800";

pub const SELECT_BASE: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white";

pub const BUTTON_BASE: &str = "px-5 py-2.5 rounded-lg font-medium text-sm text-white text-center transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_PRIMARY: &str = "bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800";
pub const BUTTON_DARK: &str = "bg-gray-800 hover:bg-gray-900 focus:ring-4 focus:outline-none focus:ring-gray-300 dark:bg-gray-700 dark:hover:bg-gray-600";

pub const TEXT_LABEL: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const TEXT_MUTED: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const HEADING_LG: &str = "text-3xl font-extrabold mb-4 text-center text-gray-900 dark:text-white";
pub const HEADING_MD: &str = "text-2xl font-bold mb-5 text-gray-900 dark:text-white";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn button_primary() -> String {
    combine_classes(BUTTON_BASE, BUTTON_PRIMARY)
}

pub fn button_dark() -> String {
    combine_classes(BUTTON_BASE, BUTTON_DARK)
}
