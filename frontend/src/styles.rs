pub const PAGE: &str = "h-screen bg-gradient-to-br from-slate-900 via-gray-900 to-black flex flex-col overflow-hidden relative";
pub const PAGE_GLOW: &str = "absolute inset-0 bg-gradient-to-br from-yellow-400/20 via-transparent to-red-600/20";
pub const WHEEL_STAGE: &str = "flex-1 flex items-center justify-center p-2";
pub const CONTROLS: &str = "absolute top-6 right-6 z-20 flex flex-col items-end space-y-3";
pub const OVERLAY: &str = "absolute top-24 right-4 z-20 max-h-[calc(100vh-120px)] overflow-y-auto";
pub const BUTTON_GOLD_ICON: &str = "bg-gradient-to-br from-yellow-500 to-yellow-600 text-black font-bold py-3 px-4 rounded-lg shadow-2xl hover:from-yellow-400 hover:to-yellow-500 transition-all transform hover:scale-105 text-sm border border-yellow-400";
pub const BUTTON_BLUE_ICON: &str = "bg-gradient-to-br from-blue-500 to-blue-600 text-white font-bold py-3 px-4 rounded-lg shadow-2xl hover:from-blue-400 hover:to-blue-500 transition-all transform hover:scale-105 text-sm border border-blue-400";
pub const PANEL: &str = "w-full max-w-md bg-gradient-to-br from-gray-900 to-black rounded-xl shadow-2xl p-6 border border-yellow-500/30 backdrop-blur-sm";
pub const PANEL_AUDIO: &str = "bg-gradient-to-br from-gray-900 via-black to-gray-900 rounded-lg p-4 shadow-2xl border-2 border-blue-400 min-w-[250px]";
pub const INPUT: &str = "flex-1 px-3 py-2 bg-gray-800 border border-yellow-500/50 rounded-md focus:outline-none focus:ring-2 focus:ring-yellow-400 text-white placeholder-gray-400";
pub const INPUT_COLOR: &str = "w-12 h-10 border border-yellow-500/50 rounded-md cursor-pointer bg-gray-800";
pub const BUTTON_ADD: &str = "w-full bg-gradient-to-r from-yellow-600 to-yellow-500 text-black font-bold py-2 px-4 rounded-md hover:from-yellow-500 hover:to-yellow-400 transition-all transform hover:scale-105 border border-yellow-400";
pub const BUTTON_SMALL: &str = "text-white px-2 py-1 rounded text-sm";
pub const BUTTON_SUGGESTION: &str = "text-xs bg-gray-200 text-gray-700 px-2 py-1 rounded hover:bg-gray-300 transition-colors";
pub const PRIZE_ROW: &str = "flex items-center space-x-2 p-3 bg-gray-800 rounded-lg border border-gray-700 hover:border-yellow-500/50 transition-colors";
pub const TEXT_ERROR: &str = "text-sm text-red-400 mt-2";
pub const TEXT_MUTED: &str = "text-gray-400 text-center py-4";
pub const TEXT_LABEL: &str = "text-white text-xs";
pub const MODAL_BACKDROP: &str = "fixed inset-0 bg-black bg-opacity-80 flex items-center justify-center z-50 p-4 backdrop-blur-sm";
pub const MODAL_CARD: &str = "bg-gradient-to-br from-gray-900 via-black to-gray-900 rounded-2xl p-6 sm:p-8 md:p-10 w-[90vw] sm:w-[80vw] md:w-[75vw] max-w-4xl min-w-[320px] text-center shadow-2xl transform border-4 relative overflow-hidden";
