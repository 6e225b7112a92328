use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy)]
pub struct Tip {
    pub title: &'static str,
    pub description: &'static str,
}

pub const TIPS: [Tip; 4] = [
    Tip {
        title: "Master the 75% Rule",
        description: "Track attendance to stay just above the minimum.",
    },
    Tip {
        title: "Befriend Attendance Takers",
        description: "They might cover for you occasionally.",
    },
    Tip {
        title: "Time It Right",
        description: "Skip strategically around holidays.",
    },
    Tip {
        title: "Be the Tech Helper",
        description: "Offer to help with tech for special privileges.",
    },
];

pub const WARNING: Tip = Tip {
    title: "Don't Get Caught!",
    description: "Remember to balance your bunking habits. Too many absences can affect your grades \
                  and attendance requirements. Bunk responsibly!",
};

pub const EXCUSES: [&str; 10] = [
    "I have a doctor's appointment.",
    "My laptop crashed!",
    "Family emergency.",
    "Food poisoning.",
    "Project deadline for another course.",
    "Alarm didn't go off.",
    "Stuck in traffic.",
    "Attending a family wedding.",
    "Severe migraine.",
    "Airport pickup duty.",
];

pub fn random_excuse<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    EXCUSES.choose(rng).copied().unwrap_or(EXCUSES[0])
}
