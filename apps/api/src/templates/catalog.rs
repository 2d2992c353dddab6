use super::{HumorTemplate, JokeExample, Phrasebook};

/// Built-in humor styles, in display order.
pub static BUILTIN_TEMPLATES: &[HumorTemplate] = &[
    HumorTemplate {
        key: "domheid",
        name: "Domheid (Stupidity)",
        description: "Laughing at foolish behavior or pretending to be foolish.",
        prompt_focus: "Mock naive logic and obvious bad decisions in a playful way.",
        examples: &[
            JokeExample {
                input: "I tried to fix the printer by whispering positive affirmations.",
                joke: "I told the printer it was doing amazing and it rewarded me by printing in invisible ink.",
            },
            JokeExample {
                input: "We forgot the password and guessed 'password'.",
                joke: "The system locked us out for security, which was fair because our strategy was a crime scene.",
            },
        ],
        phrasebook: Phrasebook {
            setup: &[
                "Someone heard {seed} and decided the smartest response was to do it twice.",
                "When that failed, they tried it again, but louder.",
            ],
            endings: &[
                "Experts are still looking for the plan.",
                "The instructions were on the box the whole time.",
                "Confidence: high. Results: invisible.",
            ],
        },
    },
    HumorTemplate {
        key: "zelfspot",
        name: "Zelfspot (Self-mockery)",
        description: "Making fun of yourself with insight and confidence.",
        prompt_focus: "Make the speaker the target of the joke, with honest self-mockery.",
        examples: &[
            JokeExample {
                input: "I made a five-step plan to wake up earlier.",
                joke: "I built a perfect morning routine and then slept through the alarm with professional commitment.",
            },
            JokeExample {
                input: "I said I would keep the project simple.",
                joke: "My idea of simple now has color coding, versioning, and an emergency spreadsheet.",
            },
        ],
        phrasebook: Phrasebook {
            setup: &[
                "I looked at {seed} and thought: finally, something I can handle.",
                "Reader, I could not handle it.",
            ],
            endings: &[
                "My talent is consistency, mostly in disappointing myself.",
                "I would give myself feedback, but I know I would ignore it.",
            ],
        },
    },
    HumorTemplate {
        key: "primitieve_humor",
        name: "Primitieve humor (Primitive humor)",
        description: "Basic, physical, or taboo humor that breaks etiquette.",
        prompt_focus: "Use physical clumsiness and lowbrow silliness without explicit vulgar content.",
        examples: &[
            JokeExample {
                input: "I entered the room with confidence.",
                joke: "I slipped on nothing, waved like it was choreography, and called it a soft landing.",
            },
            JokeExample {
                input: "I tried to act classy at dinner.",
                joke: "One sneeze later I looked like modern art and everyone pretended not to see it.",
            },
        ],
        phrasebook: Phrasebook {
            setup: &[
                "I announced {seed} with great dignity.",
                "Then I tripped over the chair I had just pulled out for myself.",
            ],
            endings: &[
                "The soup took most of the damage.",
                "I called it a dance move and nobody believed me.",
                "My dignity landed somewhere near the coat rack.",
            ],
        },
    },
    HumorTemplate {
        key: "zwarte_humor",
        name: "Zwarte humor (Black humor)",
        description: "Joking about heavy themes to cope with tension.",
        prompt_focus: "Use dark but non-hateful humor about stress, doom, and survival.",
        examples: &[
            JokeExample {
                input: "My calendar is full this week.",
                joke: "My free time now exists only as a memorial service between two meetings.",
            },
            JokeExample {
                input: "I checked my deadline.",
                joke: "The deadline looked back at me like we were both aware only one of us would survive.",
            },
        ],
        phrasebook: Phrasebook {
            setup: &[
                "They told me {seed} and I started drafting my will.",
                "I left my houseplants to whoever survives the next meeting.",
            ],
            endings: &[
                "On the bright side, the stress will not outlive me.",
                "At least my inbox will finally reach zero.",
            ],
        },
    },
    HumorTemplate {
        key: "ironie",
        name: "Ironie (Irony)",
        description: "Saying the opposite of what is meant in a playful way.",
        prompt_focus: "Praise a bad outcome as if it were excellent.",
        examples: &[
            JokeExample {
                input: "I deployed on Friday evening.",
                joke: "Brilliant timing. Nothing says relaxation like emergency bug triage at midnight.",
            },
            JokeExample {
                input: "I skipped testing to save time.",
                joke: "Fantastic efficiency. I only spent the rest of the night testing in production.",
            },
        ],
        phrasebook: Phrasebook {
            setup: &[
                "Oh great, {seed}.",
                "Truly the highlight of my week, possibly my decade.",
            ],
            endings: &[
                "I could not have planned a better disaster if I tried.",
                "Please, do it again, I was almost relaxed.",
                "Five stars, would panic again.",
            ],
        },
    },
    HumorTemplate {
        key: "leedvermaak",
        name: "Leedvermaak (Schadenfreude)",
        description: "Enjoying another person's harmless mishap.",
        prompt_focus: "Find comic relief in someone else's minor, harmless failure.",
        examples: &[
            JokeExample {
                input: "My colleague presented with total confidence.",
                joke: "When slide two opened upside down, I felt bad for three seconds and then took notes for my own mistakes.",
            },
            JokeExample {
                input: "Someone bragged they never typo.",
                joke: "They wrote 'pubic release' in the company chat, and suddenly humility became a team value.",
            },
        ],
        phrasebook: Phrasebook {
            setup: &[
                "My colleague bragged about {seed} right before it went wrong.",
                "I felt sorry for them for almost three whole seconds.",
            ],
            endings: &[
                "Then I took notes, for science.",
                "The screenshot is already in the team chat.",
            ],
        },
    },
    HumorTemplate {
        key: "taalhumor",
        name: "Taalhumor (Language humor)",
        description: "Wordplay, ambiguity, and jokes around phrasing.",
        prompt_focus: "Use puns, double meaning, or playful phrasing.",
        examples: &[
            JokeExample {
                input: "They said to break a leg before my talk.",
                joke: "I delivered safely, but my confidence still needed a cast.",
            },
            JokeExample {
                input: "I asked for constructive feedback.",
                joke: "They were so constructive they rebuilt my entire personality.",
            },
        ],
        phrasebook: Phrasebook {
            setup: &[
                "I tried to explain {seed}, but the words kept changing meaning.",
                "Every sentence had a second job on the side.",
            ],
            endings: &[
                "Now I am fluent in puns and broke in vocabulary.",
                "It was a play on words and the words won.",
                "I lost the argument but kept the pun.",
            ],
        },
    },
    HumorTemplate {
        key: "overdrijving",
        name: "Overdrijving (Exaggeration)",
        description: "Stretching reality to absurd scale for effect.",
        prompt_focus: "Amplify details to ridiculous proportions.",
        examples: &[
            JokeExample {
                input: "I sent one reminder email.",
                joke: "Within minutes, three departments, two satellites, and my grandmother were aware of the update.",
            },
            JokeExample {
                input: "I had a small delay.",
                joke: "By the time I finished, archaeologists classified the task as a lost civilization.",
            },
        ],
        phrasebook: Phrasebook {
            setup: &[
                "After {seed}, the news spread faster than light.",
                "Three continents issued official statements before lunch.",
            ],
            endings: &[
                "Astronomers now track it as a minor planet.",
                "My grandmother heard about it on the moon.",
            ],
        },
    },
    HumorTemplate {
        key: "understatement",
        name: "Understatement",
        description: "Deliberately downplaying a big event.",
        prompt_focus: "Describe chaos as if it were mildly inconvenient.",
        examples: &[
            JokeExample {
                input: "The server crashed during launch.",
                joke: "We had a tiny hiccup if your definition of tiny includes public panic and six phone calls from management.",
            },
            JokeExample {
                input: "Our demo failed live.",
                joke: "It was a slightly imperfect moment, followed by a brief silence measured in geological time.",
            },
        ],
        phrasebook: Phrasebook {
            setup: &[
                "So, {seed}.",
                "A small detail, barely worth the four emergency meetings.",
            ],
            endings: &[
                "Nothing a decade of therapy cannot fix.",
                "A minor bump, if the road was a cliff.",
            ],
        },
    },
    HumorTemplate {
        key: "slimme_observatie",
        name: "De slimme observatie (Clever observation)",
        description: "Pointing out odd things in normal daily behavior.",
        prompt_focus: "Highlight an everyday social absurdity in 'have you noticed' style.",
        examples: &[
            JokeExample {
                input: "Team meetings start at 9:00.",
                joke: "Why is every 9:00 meeting actually a 9:07 meeting with seven people saying, 'Can you hear me?'",
            },
            JokeExample {
                input: "People say they are quick on email.",
                joke: "Have you noticed 'quick reply' usually means after you've sent the third polite follow-up?",
            },
        ],
        phrasebook: Phrasebook {
            setup: &[
                "Have you ever noticed that {seed} always happens to everyone at the same time?",
                "And yet we all act surprised.",
            ],
            endings: &[
                "It is the only thing humanity schedules perfectly.",
                "Somebody should really write a memo about it.",
            ],
        },
    },
    HumorTemplate {
        key: "plotselinge_ommezwaai",
        name: "De plotselinge ommezwaai (Sudden twist)",
        description: "Setting expectation, then sharply breaking it.",
        prompt_focus: "Build a pattern then break it with a surprising final turn.",
        examples: &[
            JokeExample {
                input: "I had a perfect plan for my day.",
                joke: "I prioritized, scheduled, optimized, and then spent two hours choosing a font.",
            },
            JokeExample {
                input: "I prepared three backup options.",
                joke: "Plan A failed, Plan B failed, and Plan C taught me how to make tea under pressure.",
            },
        ],
        phrasebook: Phrasebook {
            setup: &[
                "I prepared for {seed} with a checklist, a backup plan, and a backup for the backup.",
                "Everything was under control.",
            ],
            endings: &[
                "Then I realised I had prepared for the wrong day.",
                "Then the cat walked across the keyboard and approved everything.",
                "Then I spent the rest of the afternoon choosing a font.",
            ],
        },
    },
    HumorTemplate {
        key: "verkeerde_opmerking",
        name: "De verkeerde opmerking (Inappropriate remark)",
        description: "Breaking social etiquette with blunt or shocking comments.",
        prompt_focus: "Use blunt honesty that breaks politeness, without hateful or abusive language.",
        examples: &[
            JokeExample {
                input: "They asked for honest feedback on a confusing presentation.",
                joke: "I said, 'Great mystery novel, but when does the data arrive?' and the room discovered silence.",
            },
            JokeExample {
                input: "Someone said this could have been an email.",
                joke: "I replied, 'It still can,' and suddenly I was not invited to the follow-up.",
            },
        ],
        phrasebook: Phrasebook {
            setup: &[
                "When everyone politely nodded at {seed}, I said what we were all thinking.",
                "Out loud. In the meeting.",
            ],
            endings: &[
                "I have not been invited to a meeting since.",
                "The silence that followed had its own weather system.",
            ],
        },
    },
    HumorTemplate {
        key: "cirkelhumor",
        name: "Cirkelhumor (Circular humor)",
        description: "Paradoxes, loops, and self-referential joke logic.",
        prompt_focus: "Use circular logic or a self-referential paradox.",
        examples: &[
            JokeExample {
                input: "I stopped overthinking by analyzing less.",
                joke: "I made a detailed plan for not making detailed plans, and it worked until I reviewed it twice.",
            },
            JokeExample {
                input: "I wrote a note to be more spontaneous.",
                joke: "Now every spontaneous moment is scheduled between two reminders to relax naturally.",
            },
        ],
        phrasebook: Phrasebook {
            setup: &[
                "I made a plan to stop thinking about {seed}.",
                "The plan requires me to think about it every morning.",
            ],
            endings: &[
                "Which reminds me to make a plan to stop thinking about it.",
                "I will explain this joke once I understand the joke about explaining it.",
            ],
        },
    },
    HumorTemplate {
        key: "antihumor",
        name: "Antihumor",
        description: "Intentionally flat jokes or no punchline at all.",
        prompt_focus: "Deliver a plain, intentionally unexciting anti-joke.",
        examples: &[
            JokeExample {
                input: "Why did I open the document?",
                joke: "To read it. Then I closed it.",
            },
            JokeExample {
                input: "I expected a big plot twist today.",
                joke: "Nothing happened. Lunch was acceptable.",
            },
        ],
        phrasebook: Phrasebook {
            setup: &["Here is a joke about {seed}.", "It happened."],
            endings: &["That is all.", "Lunch was fine.", "Then it stopped happening."],
        },
    },
];
