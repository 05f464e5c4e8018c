//! Default exercise catalog.
//!
//! This module provides the built-in exercises, the fixed warmup and cooldown
//! routines, and catalog validation.

use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Equipment tags the catalog is allowed to reference
pub const KNOWN_EQUIPMENT: &[&str] = &[
    "bodyweight",
    "dumbbells",
    "barbell",
    "bench",
    "incline_bench",
    "decline_bench",
    "pull_up_bar",
    "dip_bars",
    "cables",
    "leg_press_machine",
    "leg_curl_machine",
    "leg_extension_machine",
    "preacher_bench",
    "t_bar_handle",
];

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

static WARMUP: Lazy<Vec<GeneratedExercise>> = Lazy::new(|| {
    vec![
        routine_step(
            "warmup",
            exercise(
                "arm_circles",
                "Arm Circles",
                "Shoulders",
                Difficulty::Beginner,
                Muscles {
                    primary: &["shoulders"],
                    secondary: &["chest", "back"],
                },
                &["bodyweight"],
                Coaching {
                    instructions: &[
                        "Stand with arms extended",
                        "Make small circles forward",
                        "Reverse direction",
                    ],
                    form_tips: &["Keep movements controlled", "Don't rush"],
                    common_mistakes: &["Too fast", "Too large circles"],
                },
            ),
            10,
            0,
        ),
        routine_step(
            "warmup",
            exercise(
                "leg_swings",
                "Leg Swings",
                "Legs",
                Difficulty::Beginner,
                Muscles {
                    primary: &["hip_flexors", "glutes"],
                    secondary: &["hamstrings", "calves"],
                },
                &["bodyweight"],
                Coaching {
                    instructions: &[
                        "Hold wall for support",
                        "Swing leg forward and back",
                        "Switch legs",
                    ],
                    form_tips: &["Controlled movement", "Keep core engaged"],
                    common_mistakes: &["Too much momentum", "Poor balance"],
                },
            ),
            10,
            0,
        ),
    ]
});

static COOLDOWN: Lazy<Vec<GeneratedExercise>> = Lazy::new(|| {
    vec![
        routine_step(
            "cooldown",
            exercise(
                "standing_quad_stretch",
                "Standing Quad Stretch",
                "Legs",
                Difficulty::Beginner,
                Muscles {
                    primary: &["quadriceps"],
                    secondary: &["hip_flexors"],
                },
                &["bodyweight"],
                Coaching {
                    instructions: &[
                        "Stand on one leg",
                        "Pull heel to glute",
                        "Hold stretch",
                        "Switch legs",
                    ],
                    form_tips: &["Keep knees together", "Don't overstretch"],
                    common_mistakes: &["Poor balance", "Too aggressive"],
                },
            ),
            1,
            30,
        ),
        routine_step(
            "cooldown",
            exercise(
                "shoulder_stretch",
                "Shoulder Stretch",
                "Shoulders",
                Difficulty::Beginner,
                Muscles {
                    primary: &["anterior_deltoids", "chest"],
                    secondary: &["biceps"],
                },
                &["bodyweight"],
                Coaching {
                    instructions: &[
                        "Extend arm across chest",
                        "Pull with other arm",
                        "Hold stretch",
                        "Switch arms",
                    ],
                    form_tips: &["Don't force the stretch", "Breathe deeply"],
                    common_mistakes: &["Too aggressive", "Poor posture"],
                },
            ),
            1,
            30,
        ),
    ]
});

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference. This function is retained for testing and custom catalog creation.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

/// The fixed two-step warmup prepended to every workout
pub fn warmup() -> &'static [GeneratedExercise] {
    &WARMUP
}

/// The fixed two-step cooldown appended to every workout
pub fn cooldown() -> &'static [GeneratedExercise] {
    &COOLDOWN
}

struct Muscles {
    primary: &'static [&'static str],
    secondary: &'static [&'static str],
}

struct Coaching {
    instructions: &'static [&'static str],
    form_tips: &'static [&'static str],
    common_mistakes: &'static [&'static str],
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn exercise(
    id: &str,
    name: &str,
    muscle_group: &str,
    difficulty: Difficulty,
    muscles: Muscles,
    equipment: &[&str],
    coaching: Coaching,
) -> ExerciseRecord {
    ExerciseRecord {
        id: id.into(),
        name: name.into(),
        muscle_group: muscle_group.into(),
        primary_muscles: owned(muscles.primary),
        secondary_muscles: owned(muscles.secondary),
        equipment: owned(equipment),
        difficulty,
        instructions: owned(coaching.instructions),
        form_tips: owned(coaching.form_tips),
        common_mistakes: owned(coaching.common_mistakes),
    }
}

/// Wrap a routine exercise with a fixed prescription, tagging id and name
fn routine_step(
    phase: &str,
    mut record: ExerciseRecord,
    reps: u32,
    rest_seconds: u32,
) -> GeneratedExercise {
    let mut label = phase.to_string();
    if let Some(first) = label.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    record.id = format!("{}_{}", phase, record.id);
    record.name = format!("{}: {}", label, record.name);

    GeneratedExercise {
        exercise: record,
        sets: 1,
        reps,
        rest_seconds,
        weight: None,
    }
}

/// Internal function that actually builds the catalog
fn build_default_catalog_internal() -> Catalog {
    let exercises = vec![
        exercise(
            "push_up",
            "Push-ups",
            "Chest",
            Difficulty::Beginner,
            Muscles {
                primary: &["chest", "anterior_deltoids", "triceps"],
                secondary: &["core", "serratus_anterior"],
            },
            &["bodyweight"],
            Coaching {
                instructions: &[
                    "Start in plank position with hands slightly wider than shoulders",
                    "Lower body until chest nearly touches ground",
                    "Push back up to starting position",
                    "Keep core tight throughout movement",
                ],
                form_tips: &[
                    "Keep body in straight line",
                    "Don't let hips sag or pike up",
                    "Full range of motion is key",
                ],
                common_mistakes: &[
                    "Incomplete range of motion",
                    "Flaring elbows too wide",
                    "Sagging hips",
                ],
            },
        ),
        exercise(
            "bench_press",
            "Bench Press",
            "Chest",
            Difficulty::Intermediate,
            Muscles {
                primary: &["chest", "anterior_deltoids", "triceps"],
                secondary: &["serratus_anterior"],
            },
            &["barbell", "bench"],
            Coaching {
                instructions: &[
                    "Lie on bench with feet flat on floor",
                    "Grip bar slightly wider than shoulders",
                    "Lower bar to chest with control",
                    "Press up explosively",
                ],
                form_tips: &["Retract shoulder blades", "Keep core tight", "Drive through heels"],
                common_mistakes: &[
                    "Bouncing bar off chest",
                    "Flaring elbows too wide",
                    "Lifting feet off ground",
                ],
            },
        ),
        exercise(
            "incline_dumbbell_press",
            "Incline Dumbbell Press",
            "Chest",
            Difficulty::Intermediate,
            Muscles {
                primary: &["upper_chest", "anterior_deltoids", "triceps"],
                secondary: &["serratus_anterior"],
            },
            &["dumbbells", "incline_bench"],
            Coaching {
                instructions: &[
                    "Set bench to 30-45 degree incline",
                    "Start with dumbbells at chest level",
                    "Press up and slightly together",
                    "Lower with control",
                ],
                form_tips: &[
                    "Focus on upper chest contraction",
                    "Don't over-arch back",
                    "Control the negative",
                ],
                common_mistakes: &[
                    "Too steep incline angle",
                    "Using too much weight",
                    "Poor range of motion",
                ],
            },
        ),
        exercise(
            "dumbbell_flyes",
            "Dumbbell Flyes",
            "Chest",
            Difficulty::Beginner,
            Muscles {
                primary: &["chest", "anterior_deltoids"],
                secondary: &["serratus_anterior"],
            },
            &["dumbbells", "bench"],
            Coaching {
                instructions: &[
                    "Lie on bench with dumbbells",
                    "Start with arms extended, slight bend in elbows",
                    "Lower dumbbells in wide arc",
                    "Feel stretch in chest",
                    "Bring dumbbells together with slight bend",
                ],
                form_tips: &[
                    "Keep slight bend in elbows",
                    "Focus on chest stretch",
                    "Don't go too deep",
                    "Control the movement",
                ],
                common_mistakes: &[
                    "Straight arms (elbow injury risk)",
                    "Too deep stretch",
                    "Using too much weight",
                    "Poor control",
                ],
            },
        ),
        exercise(
            "decline_bench_press",
            "Decline Bench Press",
            "Chest",
            Difficulty::Intermediate,
            Muscles {
                primary: &["lower_chest", "anterior_deltoids", "triceps"],
                secondary: &["serratus_anterior"],
            },
            &["barbell", "decline_bench"],
            Coaching {
                instructions: &[
                    "Set bench to 15-30 degree decline",
                    "Secure feet in foot rests",
                    "Grip bar slightly wider than shoulders",
                    "Lower to lower chest",
                    "Press up explosively",
                ],
                form_tips: &["Keep core tight", "Control the descent", "Full range of motion"],
                common_mistakes: &["Too steep decline", "Bouncing off chest", "Poor foot positioning"],
            },
        ),
        exercise(
            "cable_crossover",
            "Cable Crossover",
            "Chest",
            Difficulty::Intermediate,
            Muscles {
                primary: &["chest", "anterior_deltoids"],
                secondary: &["serratus_anterior"],
            },
            &["cables"],
            Coaching {
                instructions: &[
                    "Set cables at shoulder height",
                    "Step forward with slight lean",
                    "Bring hands together in front",
                    "Feel chest squeeze",
                    "Return with control",
                ],
                form_tips: &[
                    "Slight forward lean",
                    "Focus on chest contraction",
                    "Control the stretch",
                ],
                common_mistakes: &["Too much weight", "Poor posture", "Incomplete range"],
            },
        ),
        exercise(
            "tricep_dips",
            "Tricep Dips",
            "Triceps",
            Difficulty::Intermediate,
            Muscles {
                primary: &["triceps"],
                secondary: &["anterior_deltoids", "chest"],
            },
            &["dip_bars", "bodyweight"],
            Coaching {
                instructions: &[
                    "Support body on dip bars",
                    "Lower body by bending elbows",
                    "Keep torso upright",
                    "Press up to starting position",
                    "Squeeze triceps at top",
                ],
                form_tips: &[
                    "Keep elbows close to body",
                    "Don't go too deep",
                    "Control the movement",
                    "Full extension at top",
                ],
                common_mistakes: &[
                    "Going too deep",
                    "Flaring elbows",
                    "Using momentum",
                    "Incomplete range",
                ],
            },
        ),
        exercise(
            "close_grip_bench_press",
            "Close Grip Bench Press",
            "Triceps",
            Difficulty::Intermediate,
            Muscles {
                primary: &["triceps"],
                secondary: &["chest", "anterior_deltoids"],
            },
            &["barbell", "bench"],
            Coaching {
                instructions: &[
                    "Lie on bench with narrow grip",
                    "Hands shoulder-width apart",
                    "Lower bar to chest",
                    "Press up focusing on triceps",
                    "Keep elbows close to body",
                ],
                form_tips: &["Narrow grip", "Elbows close to body", "Focus on triceps"],
                common_mistakes: &["Too wide grip", "Flaring elbows", "Using too much weight"],
            },
        ),
        exercise(
            "overhead_tricep_extension",
            "Overhead Tricep Extension",
            "Triceps",
            Difficulty::Beginner,
            Muscles {
                primary: &["triceps"],
                secondary: &["core"],
            },
            &["dumbbells"],
            Coaching {
                instructions: &[
                    "Hold dumbbell overhead with both hands",
                    "Lower behind head",
                    "Extend arms back up",
                    "Keep core tight",
                ],
                form_tips: &["Keep elbows close", "Control the movement", "Full extension"],
                common_mistakes: &["Flaring elbows", "Using momentum", "Poor posture"],
            },
        ),
        exercise(
            "tricep_pushdowns",
            "Tricep Pushdowns",
            "Triceps",
            Difficulty::Beginner,
            Muscles {
                primary: &["triceps"],
                secondary: &["core"],
            },
            &["cables"],
            Coaching {
                instructions: &[
                    "Stand at cable machine",
                    "Grip bar with overhand grip",
                    "Keep elbows at sides",
                    "Push down until arms extended",
                    "Return with control",
                ],
                form_tips: &["Elbows stationary", "Focus on triceps", "Full range of motion"],
                common_mistakes: &["Moving elbows", "Using momentum", "Incomplete extension"],
            },
        ),
        exercise(
            "diamond_push_ups",
            "Diamond Push-ups",
            "Triceps",
            Difficulty::Intermediate,
            Muscles {
                primary: &["triceps"],
                secondary: &["chest", "core"],
            },
            &["bodyweight"],
            Coaching {
                instructions: &[
                    "Start in push-up position",
                    "Place hands close together forming diamond",
                    "Lower chest to hands",
                    "Push up focusing on triceps",
                ],
                form_tips: &["Hands close together", "Focus on triceps", "Keep body straight"],
                common_mistakes: &["Hands too wide", "Poor form", "Incomplete range"],
            },
        ),
        exercise(
            "lying_tricep_extension",
            "Lying Tricep Extension",
            "Triceps",
            Difficulty::Intermediate,
            Muscles {
                primary: &["triceps"],
                secondary: &["core"],
            },
            &["dumbbells", "bench"],
            Coaching {
                instructions: &[
                    "Lie on bench with dumbbells",
                    "Start with arms extended",
                    "Lower weights to sides of head",
                    "Extend back up",
                    "Keep elbows stable",
                ],
                form_tips: &["Keep elbows stable", "Control the movement", "Full range of motion"],
                common_mistakes: &["Moving elbows", "Using too much weight", "Poor control"],
            },
        ),
        exercise(
            "overhead_press",
            "Overhead Press",
            "Shoulders",
            Difficulty::Intermediate,
            Muscles {
                primary: &["anterior_deltoids", "medial_deltoids"],
                secondary: &["triceps", "core", "upper_chest"],
            },
            &["barbell"],
            Coaching {
                instructions: &[
                    "Start with bar at shoulder level",
                    "Grip bar slightly wider than shoulders",
                    "Press straight up, keeping bar close to face",
                    "Lock out overhead with shoulders by ears",
                    "Lower with control to starting position",
                ],
                form_tips: &[
                    "Keep core tight throughout",
                    "Press straight up, not forward",
                    "Full range of motion",
                    "Breathe at the top",
                ],
                common_mistakes: &[
                    "Pressing forward instead of up",
                    "Incomplete lockout",
                    "Using legs to help (strict press)",
                    "Poor core stability",
                ],
            },
        ),
        exercise(
            "lateral_raises",
            "Lateral Raises",
            "Shoulders",
            Difficulty::Beginner,
            Muscles {
                primary: &["medial_deltoids"],
                secondary: &["anterior_deltoids", "traps"],
            },
            &["dumbbells"],
            Coaching {
                instructions: &[
                    "Stand with dumbbells at sides",
                    "Raise arms to shoulder height",
                    "Keep slight bend in elbows",
                    "Lead with pinkies",
                    "Lower with control",
                ],
                form_tips: &[
                    "Don't swing the weights",
                    "Focus on deltoid contraction",
                    "Full range of motion",
                    "Control the negative",
                ],
                common_mistakes: &[
                    "Using momentum",
                    "Too heavy weights",
                    "Incomplete range",
                    "Poor posture",
                ],
            },
        ),
        exercise(
            "front_raises",
            "Front Raises",
            "Shoulders",
            Difficulty::Beginner,
            Muscles {
                primary: &["anterior_deltoids"],
                secondary: &["core"],
            },
            &["dumbbells"],
            Coaching {
                instructions: &[
                    "Stand with dumbbells at thighs",
                    "Raise one arm to shoulder height",
                    "Keep slight bend in elbow",
                    "Lower with control",
                    "Alternate arms",
                ],
                form_tips: &["Control the movement", "Don't swing", "Focus on front deltoids"],
                common_mistakes: &["Using momentum", "Too heavy weight", "Poor posture"],
            },
        ),
        exercise(
            "rear_delt_flyes",
            "Rear Delt Flyes",
            "Shoulders",
            Difficulty::Beginner,
            Muscles {
                primary: &["posterior_deltoids"],
                secondary: &["rhomboids", "middle_traps"],
            },
            &["dumbbells"],
            Coaching {
                instructions: &[
                    "Bend forward at hips",
                    "Hold dumbbells with slight bend",
                    "Raise arms to sides",
                    "Squeeze shoulder blades",
                    "Lower with control",
                ],
                form_tips: &[
                    "Keep slight bend in elbows",
                    "Focus on rear delts",
                    "Squeeze shoulder blades",
                ],
                common_mistakes: &["Using momentum", "Too heavy weight", "Poor posture"],
            },
        ),
        exercise(
            "arnold_press",
            "Arnold Press",
            "Shoulders",
            Difficulty::Intermediate,
            Muscles {
                primary: &["anterior_deltoids", "medial_deltoids"],
                secondary: &["triceps", "core"],
            },
            &["dumbbells"],
            Coaching {
                instructions: &[
                    "Start with dumbbells at chest",
                    "Palms facing body",
                    "Press up while rotating palms out",
                    "End with palms facing forward",
                    "Reverse the movement",
                ],
                form_tips: &["Smooth rotation", "Control the movement", "Full range of motion"],
                common_mistakes: &["Rushing the movement", "Poor rotation", "Using too much weight"],
            },
        ),
        exercise(
            "face_pulls",
            "Face Pulls",
            "Shoulders",
            Difficulty::Beginner,
            Muscles {
                primary: &["posterior_deltoids", "rhomboids"],
                secondary: &["middle_traps", "biceps"],
            },
            &["cables"],
            Coaching {
                instructions: &[
                    "Set cable at face height",
                    "Grip rope with both hands",
                    "Pull to face level",
                    "Squeeze shoulder blades",
                    "Return with control",
                ],
                form_tips: &[
                    "Pull to face level",
                    "Squeeze shoulder blades",
                    "Control the movement",
                ],
                common_mistakes: &["Pulling too low", "Using momentum", "Poor posture"],
            },
        ),
        exercise(
            "pull_up",
            "Pull-ups",
            "Back",
            Difficulty::Intermediate,
            Muscles {
                primary: &["lats", "rhomboids", "middle_traps"],
                secondary: &["biceps", "posterior_deltoids", "core"],
            },
            &["pull_up_bar"],
            Coaching {
                instructions: &[
                    "Hang from bar with overhand grip",
                    "Pull body up until chin over bar",
                    "Squeeze shoulder blades together",
                    "Lower with control",
                    "Keep core engaged",
                ],
                form_tips: &[
                    "Initiate with lats, not biceps",
                    "Keep chest up",
                    "Full range of motion",
                    "Control the negative",
                ],
                common_mistakes: &[
                    "Kipping or swinging",
                    "Incomplete range of motion",
                    "Using momentum",
                    "Poor grip",
                ],
            },
        ),
        exercise(
            "bent_over_row",
            "Bent-Over Row",
            "Back",
            Difficulty::Intermediate,
            Muscles {
                primary: &["lats", "rhomboids", "middle_traps"],
                secondary: &["biceps", "posterior_deltoids", "core"],
            },
            &["barbell"],
            Coaching {
                instructions: &[
                    "Hinge at hips, keep back straight",
                    "Grip bar overhand, slightly wider than shoulders",
                    "Pull bar to lower chest/upper abdomen",
                    "Squeeze shoulder blades together at top",
                    "Lower with control, maintaining tension",
                ],
                form_tips: &[
                    "Pull with elbows, not hands",
                    "Keep core tight throughout",
                    "Don't round back",
                    "Full range of motion",
                ],
                common_mistakes: &[
                    "Rounded back",
                    "Using too much weight",
                    "Poor hip hinge",
                    "Incomplete range of motion",
                ],
            },
        ),
        exercise(
            "lat_pulldown",
            "Lat Pulldown",
            "Back",
            Difficulty::Beginner,
            Muscles {
                primary: &["lats"],
                secondary: &["biceps", "rhomboids", "middle_traps"],
            },
            &["cables"],
            Coaching {
                instructions: &[
                    "Sit at lat pulldown machine",
                    "Grip bar wider than shoulders",
                    "Pull bar to upper chest",
                    "Squeeze shoulder blades together",
                    "Return with control",
                ],
                form_tips: &[
                    "Pull to chest, not behind neck",
                    "Squeeze shoulder blades",
                    "Control the movement",
                ],
                common_mistakes: &["Pulling behind neck", "Using momentum", "Poor posture"],
            },
        ),
        exercise(
            "seated_cable_row",
            "Seated Cable Row",
            "Back",
            Difficulty::Beginner,
            Muscles {
                primary: &["rhomboids", "middle_traps", "lats"],
                secondary: &["biceps", "posterior_deltoids"],
            },
            &["cables"],
            Coaching {
                instructions: &[
                    "Sit at cable row machine",
                    "Grip handle with both hands",
                    "Pull to lower chest",
                    "Squeeze shoulder blades together",
                    "Return with control",
                ],
                form_tips: &["Keep chest up", "Squeeze shoulder blades", "Control the movement"],
                common_mistakes: &["Rounded back", "Using momentum", "Poor posture"],
            },
        ),
        exercise(
            "t_bar_row",
            "T-Bar Row",
            "Back",
            Difficulty::Intermediate,
            Muscles {
                primary: &["lats", "rhomboids", "middle_traps"],
                secondary: &["biceps", "posterior_deltoids", "core"],
            },
            &["barbell", "t_bar_handle"],
            Coaching {
                instructions: &[
                    "Straddle barbell with T-bar handle",
                    "Hinge at hips, keep back straight",
                    "Pull handle to chest",
                    "Squeeze shoulder blades together",
                    "Lower with control",
                ],
                form_tips: &["Keep core tight", "Squeeze shoulder blades", "Control the movement"],
                common_mistakes: &["Rounded back", "Using momentum", "Poor hip hinge"],
            },
        ),
        exercise(
            "single_arm_dumbbell_row",
            "Single Arm Dumbbell Row",
            "Back",
            Difficulty::Beginner,
            Muscles {
                primary: &["lats", "rhomboids"],
                secondary: &["biceps", "posterior_deltoids", "core"],
            },
            &["dumbbells", "bench"],
            Coaching {
                instructions: &[
                    "Place knee and hand on bench",
                    "Hold dumbbell in other hand",
                    "Pull dumbbell to hip",
                    "Squeeze shoulder blade",
                    "Lower with control",
                ],
                form_tips: &["Keep core tight", "Squeeze shoulder blade", "Control the movement"],
                common_mistakes: &["Rounded back", "Using momentum", "Poor stability"],
            },
        ),
        exercise(
            "barbell_curls",
            "Barbell Curls",
            "Biceps",
            Difficulty::Beginner,
            Muscles {
                primary: &["biceps"],
                secondary: &["forearms"],
            },
            &["barbell"],
            Coaching {
                instructions: &[
                    "Stand with feet hip-width apart",
                    "Hold barbell with underhand grip",
                    "Curl bar up to shoulders",
                    "Squeeze biceps at top",
                    "Lower with control",
                ],
                form_tips: &[
                    "Keep elbows at sides",
                    "Control the movement",
                    "Full range of motion",
                ],
                common_mistakes: &["Swinging the weight", "Using momentum", "Incomplete range"],
            },
        ),
        exercise(
            "dumbbell_curls",
            "Dumbbell Curls",
            "Biceps",
            Difficulty::Beginner,
            Muscles {
                primary: &["biceps"],
                secondary: &["forearms"],
            },
            &["dumbbells"],
            Coaching {
                instructions: &[
                    "Stand with dumbbells at sides",
                    "Curl weights up to shoulders",
                    "Squeeze biceps at top",
                    "Lower with control",
                    "Keep elbows at sides",
                ],
                form_tips: &["Control the movement", "Squeeze at top", "Full range of motion"],
                common_mistakes: &["Swinging weights", "Using momentum", "Poor form"],
            },
        ),
        exercise(
            "hammer_curls",
            "Hammer Curls",
            "Biceps",
            Difficulty::Beginner,
            Muscles {
                primary: &["biceps", "brachialis"],
                secondary: &["forearms"],
            },
            &["dumbbells"],
            Coaching {
                instructions: &[
                    "Hold dumbbells with neutral grip",
                    "Curl weights up to shoulders",
                    "Keep palms facing each other",
                    "Squeeze biceps at top",
                    "Lower with control",
                ],
                form_tips: &["Neutral grip throughout", "Control the movement", "Focus on biceps"],
                common_mistakes: &["Rotating wrists", "Using momentum", "Poor control"],
            },
        ),
        exercise(
            "preacher_curls",
            "Preacher Curls",
            "Biceps",
            Difficulty::Intermediate,
            Muscles {
                primary: &["biceps"],
                secondary: &["forearms"],
            },
            &["barbell", "preacher_bench"],
            Coaching {
                instructions: &[
                    "Sit at preacher bench",
                    "Rest arms on pad",
                    "Curl bar up to shoulders",
                    "Squeeze biceps at top",
                    "Lower with control",
                ],
                form_tips: &["Keep arms on pad", "Control the movement", "Full range of motion"],
                common_mistakes: &["Lifting arms off pad", "Using momentum", "Incomplete range"],
            },
        ),
        exercise(
            "cable_curls",
            "Cable Curls",
            "Biceps",
            Difficulty::Beginner,
            Muscles {
                primary: &["biceps"],
                secondary: &["forearms"],
            },
            &["cables"],
            Coaching {
                instructions: &[
                    "Stand at cable machine",
                    "Grip bar with underhand grip",
                    "Curl bar up to shoulders",
                    "Squeeze biceps at top",
                    "Lower with control",
                ],
                form_tips: &["Keep elbows at sides", "Control the movement", "Constant tension"],
                common_mistakes: &["Moving elbows", "Using momentum", "Poor posture"],
            },
        ),
        exercise(
            "concentration_curls",
            "Concentration Curls",
            "Biceps",
            Difficulty::Beginner,
            Muscles {
                primary: &["biceps"],
                secondary: &["forearms"],
            },
            &["dumbbells", "bench"],
            Coaching {
                instructions: &[
                    "Sit on bench with legs apart",
                    "Rest elbow on inner thigh",
                    "Curl dumbbell up",
                    "Squeeze bicep at top",
                    "Lower with control",
                ],
                form_tips: &[
                    "Keep elbow stationary",
                    "Focus on bicep contraction",
                    "Control the movement",
                ],
                common_mistakes: &["Moving elbow", "Using momentum", "Poor isolation"],
            },
        ),
        exercise(
            "squat",
            "Squat",
            "Legs",
            Difficulty::Beginner,
            Muscles {
                primary: &["quadriceps", "glutes", "hamstrings"],
                secondary: &["core", "calves"],
            },
            &["bodyweight"],
            Coaching {
                instructions: &[
                    "Stand with feet shoulder-width apart",
                    "Lower by pushing hips back",
                    "Go down until thighs parallel to floor",
                    "Drive up through heels",
                ],
                form_tips: &["Keep chest up", "Knees track over toes", "Full depth is important"],
                common_mistakes: &["Knees caving in", "Incomplete depth", "Forward lean"],
            },
        ),
        exercise(
            "deadlift",
            "Deadlift",
            "Legs",
            Difficulty::Advanced,
            Muscles {
                primary: &["hamstrings", "glutes", "erector_spinae"],
                secondary: &[
                    "lats",
                    "traps",
                    "core",
                    "calves",
                ],
            },
            &["barbell"],
            Coaching {
                instructions: &[
                    "Stand with feet hip-width apart",
                    "Grip bar just outside legs",
                    "Keep back straight, chest up",
                    "Lift by extending hips and knees",
                ],
                form_tips: &["Keep bar close to body", "Don't round back", "Drive hips forward"],
                common_mistakes: &["Rounded back", "Bar drifting away", "Hips rising too fast"],
            },
        ),
        exercise(
            "lunge",
            "Lunge",
            "Legs",
            Difficulty::Beginner,
            Muscles {
                primary: &["quadriceps", "glutes"],
                secondary: &["hamstrings", "core", "calves"],
            },
            &["bodyweight"],
            Coaching {
                instructions: &[
                    "Step forward into lunge position",
                    "Lower back knee toward ground",
                    "Push back to starting position",
                    "Alternate legs",
                ],
                form_tips: &[
                    "Keep torso upright",
                    "Don't let front knee go past toes",
                    "Control the movement",
                ],
                common_mistakes: &[
                    "Knee going past toes",
                    "Leaning forward",
                    "Incomplete range of motion",
                ],
            },
        ),
        exercise(
            "romanian_deadlift",
            "Romanian Deadlift",
            "Legs",
            Difficulty::Intermediate,
            Muscles {
                primary: &["hamstrings", "glutes"],
                secondary: &["erector_spinae", "core"],
            },
            &["barbell"],
            Coaching {
                instructions: &[
                    "Stand with feet hip-width apart",
                    "Hinge at hips, keep legs straighter",
                    "Lower bar along legs",
                    "Feel stretch in hamstrings",
                    "Drive hips forward to stand",
                ],
                form_tips: &[
                    "Keep bar close to legs",
                    "Hip hinge movement",
                    "Feel hamstring stretch",
                    "Don't round back",
                ],
                common_mistakes: &[
                    "Rounded back",
                    "Bending knees too much",
                    "Bar drifting away",
                    "Poor hip hinge",
                ],
            },
        ),
        exercise(
            "bulgarian_split_squats",
            "Bulgarian Split Squats",
            "Legs",
            Difficulty::Intermediate,
            Muscles {
                primary: &["quadriceps", "glutes"],
                secondary: &["hamstrings", "core", "calves"],
            },
            &["bodyweight", "dumbbells"],
            Coaching {
                instructions: &[
                    "Place rear foot on bench/box",
                    "Lower into lunge position",
                    "Keep front knee over ankle",
                    "Drive up through front heel",
                    "Complete all reps before switching",
                ],
                form_tips: &[
                    "Keep torso upright",
                    "Don't let knee go past toes",
                    "Control the movement",
                    "Full range of motion",
                ],
                common_mistakes: &[
                    "Knee going past toes",
                    "Leaning forward",
                    "Incomplete range",
                    "Poor balance",
                ],
            },
        ),
        exercise(
            "leg_press",
            "Leg Press",
            "Legs",
            Difficulty::Beginner,
            Muscles {
                primary: &["quadriceps", "glutes"],
                secondary: &["hamstrings", "calves"],
            },
            &["leg_press_machine"],
            Coaching {
                instructions: &[
                    "Sit in machine",
                    "Place feet shoulder-width apart",
                    "Lower until 90 degrees",
                    "Press through heels",
                ],
                form_tips: &["Full range of motion", "Press through heels", "Control the movement"],
                common_mistakes: &["Incomplete range", "Knees caving in", "Using too much weight"],
            },
        ),
        exercise(
            "leg_curls",
            "Leg Curls",
            "Legs",
            Difficulty::Beginner,
            Muscles {
                primary: &["hamstrings"],
                secondary: &["calves"],
            },
            &["leg_curl_machine"],
            Coaching {
                instructions: &[
                    "Lie face down on machine",
                    "Position ankles under pads",
                    "Curl heels to glutes",
                    "Squeeze hamstrings at top",
                    "Lower with control",
                ],
                form_tips: &[
                    "Full range of motion",
                    "Control the negative",
                    "Squeeze at top",
                    "Don't use momentum",
                ],
                common_mistakes: &[
                    "Using momentum",
                    "Incomplete range",
                    "Too heavy weight",
                    "Poor positioning",
                ],
            },
        ),
        exercise(
            "leg_extensions",
            "Leg Extensions",
            "Legs",
            Difficulty::Beginner,
            Muscles {
                primary: &["quadriceps"],
                secondary: &["core"],
            },
            &["leg_extension_machine"],
            Coaching {
                instructions: &[
                    "Sit in machine",
                    "Position legs under pads",
                    "Extend legs to full lockout",
                    "Squeeze quads at top",
                    "Lower with control",
                ],
                form_tips: &["Full range of motion", "Squeeze at top", "Control the movement"],
                common_mistakes: &["Using momentum", "Incomplete range", "Too heavy weight"],
            },
        ),
        exercise(
            "calf_raises",
            "Standing Calf Raises",
            "Legs",
            Difficulty::Beginner,
            Muscles {
                primary: &["calves"],
                secondary: &["soleus"],
            },
            &["bodyweight", "dumbbells"],
            Coaching {
                instructions: &[
                    "Stand on edge of step or platform",
                    "Rise up on toes",
                    "Squeeze calves at top",
                    "Lower below step level",
                    "Feel stretch in calves",
                ],
                form_tips: &[
                    "Full range of motion",
                    "Control the movement",
                    "Squeeze at top",
                    "Stretch at bottom",
                ],
                common_mistakes: &[
                    "Incomplete range",
                    "Using momentum",
                    "Poor balance",
                    "Not stretching",
                ],
            },
        ),
        exercise(
            "goblet_squats",
            "Goblet Squats",
            "Legs",
            Difficulty::Beginner,
            Muscles {
                primary: &["quadriceps", "glutes"],
                secondary: &["core", "calves"],
            },
            &["dumbbells"],
            Coaching {
                instructions: &[
                    "Hold dumbbell at chest",
                    "Stand with feet shoulder-width apart",
                    "Squat down keeping chest up",
                    "Drive up through heels",
                    "Keep weight close to body",
                ],
                form_tips: &["Keep chest up", "Full depth", "Control the movement"],
                common_mistakes: &["Leaning forward", "Incomplete depth", "Poor posture"],
            },
        ),
        exercise(
            "plank",
            "Plank",
            "Core",
            Difficulty::Beginner,
            Muscles {
                primary: &["rectus_abdominis", "transverse_abdominis"],
                secondary: &["obliques", "shoulders", "glutes"],
            },
            &["bodyweight"],
            Coaching {
                instructions: &[
                    "Start in push-up position",
                    "Lower to forearms",
                    "Keep body in straight line",
                    "Hold position",
                ],
                form_tips: &["Engage core throughout", "Don't let hips sag", "Breathe normally"],
                common_mistakes: &["Hips too high or low", "Holding breath", "Poor alignment"],
            },
        ),
        exercise(
            "mountain_climbers",
            "Mountain Climbers",
            "Core",
            Difficulty::Intermediate,
            Muscles {
                primary: &["rectus_abdominis", "obliques"],
                secondary: &["shoulders", "hip_flexors", "calves"],
            },
            &["bodyweight"],
            Coaching {
                instructions: &[
                    "Start in plank position",
                    "Bring one knee to chest",
                    "Quickly switch legs",
                    "Maintain plank position",
                ],
                form_tips: &["Keep core tight", "Don't let hips rise", "Controlled movement"],
                common_mistakes: &["Hips bouncing up", "Too fast, poor form", "Not engaging core"],
            },
        ),
    ];

    Catalog { exercises }
}

impl Catalog {
    /// Look up an exercise by id
    pub fn get(&self, id: &str) -> Option<&ExerciseRecord> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Validate catalog integrity
    ///
    /// Returns a list of validation errors (empty if valid)
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen_ids = HashSet::new();

        if self.exercises.is_empty() {
            errors.push("Catalog has no exercises".to_string());
        }

        for exercise in &self.exercises {
            let id = &exercise.id;

            if id.is_empty() {
                errors.push(format!("Exercise '{}' has an empty id", exercise.name));
            }
            if !seen_ids.insert(id.as_str()) {
                errors.push(format!("Duplicate exercise id '{}'", id));
            }
            if exercise.name.is_empty() {
                errors.push(format!("Exercise '{}' has an empty name", id));
            }
            if exercise.muscle_group.is_empty() {
                errors.push(format!("Exercise '{}' has no muscle group", id));
            }
            if exercise.primary_muscles.is_empty() {
                errors.push(format!("Exercise '{}' has no primary muscles", id));
            }
            if exercise.equipment.is_empty() {
                errors.push(format!("Exercise '{}' lists no equipment", id));
            }
            for tag in &exercise.equipment {
                if !KNOWN_EQUIPMENT.contains(&tag.as_str()) {
                    errors.push(format!(
                        "Exercise '{}' references unknown equipment '{}'",
                        id, tag
                    ));
                }
            }
            if exercise.instructions.is_empty() {
                errors.push(format!("Exercise '{}' has no instructions", id));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let catalog = build_default_catalog();
        assert_eq!(catalog.len(), 42);
        assert_eq!(catalog.exercises[0].id, "push_up");
    }

    #[test]
    fn test_default_catalog_validates() {
        let catalog = build_default_catalog();
        let errors = catalog.validate();
        assert!(
            errors.is_empty(),
            "Default catalog has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_every_difficulty_represented() {
        let catalog = get_default_catalog();
        for difficulty in [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ] {
            assert!(
                catalog.exercises.iter().any(|e| e.difficulty == difficulty),
                "No {:?} exercises",
                difficulty
            );
        }
    }

    #[test]
    fn test_validate_catches_duplicates_and_unknown_equipment() {
        let mut catalog = build_default_catalog();
        let mut dup = catalog.exercises[0].clone();
        dup.equipment = vec!["hoverboard".into()];
        catalog.exercises.push(dup);

        let errors = catalog.validate();
        assert!(errors.iter().any(|e| e.contains("Duplicate exercise id 'push_up'")));
        assert!(errors.iter().any(|e| e.contains("unknown equipment 'hoverboard'")));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = get_default_catalog();
        let deadlift = catalog.get("deadlift").unwrap();
        assert_eq!(deadlift.difficulty, Difficulty::Advanced);
        assert!(catalog.get("nonexistent").is_none());
    }

    #[test]
    fn test_routines_have_two_prefixed_steps() {
        assert_eq!(warmup().len(), 2);
        assert_eq!(cooldown().len(), 2);
        assert_eq!(warmup()[0].exercise.id, "warmup_arm_circles");
        assert_eq!(warmup()[0].exercise.name, "Warmup: Arm Circles");
        assert_eq!(cooldown()[1].exercise.id, "cooldown_shoulder_stretch");
        assert!(cooldown().iter().all(|s| s.rest_seconds == 30 && s.sets == 1));
    }
}
