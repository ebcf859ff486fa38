/// Page behavior tuning constants.
///
/// These keep the scroll, timing and styling magic numbers out of the
/// wiring code.
// Navbar backdrop swaps once the page has scrolled past this offset
pub const NAVBAR_SOLID_SCROLL_PX: f64 = 100.0;
pub const NAVBAR_SOLID_BG: &str = "rgba(10, 10, 10, 0.98)";
pub const NAVBAR_TOP_BG: &str = "rgba(10, 10, 10, 0.95)";

// Section reveal observer
pub const SECTION_REVEAL_THRESHOLD: f64 = 0.1;
pub const SECTION_REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Hero title entrance
pub const HERO_VISIBLE_THRESHOLD: f64 = 0.5;
pub const HERO_INTRO_DELAY_MS: i32 = 300;
pub const HERO_INTRO_TRANSITION: &str = "all 0.8s ease";

// Stat counters start at half visibility
pub const STAT_VISIBLE_THRESHOLD: f64 = 0.5;

// Simulated send delay for the contact form
pub const FORM_SEND_DELAY_MS: i32 = 2000;
pub const FORM_SENDING_LABEL: &str = "Sending...";
pub const FORM_SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

// Notification toast timings
pub const NOTIFY_SLIDE_IN_DELAY_MS: i32 = 100;
pub const NOTIFY_LINGER_MS: i32 = 5000;
pub const NOTIFY_SLIDE_OUT_MS: i32 = 300;

// Hover transforms
pub const PROJECT_CARD_LIFT: &str = "translateY(-10px) scale(1.02)";
pub const PROJECT_CARD_REST: &str = "translateY(0) scale(1)";
pub const SKILL_ITEM_LIFT: &str = "scale(1.1) rotate(2deg)";
pub const SKILL_ITEM_REST: &str = "scale(1) rotate(0deg)";

// Hero content drifts against the page scroll at this rate
pub const PARALLAX_RATE: f64 = -0.5;

// Breathing timer period
pub const BREATHE_TICK_MS: i32 = 100;
