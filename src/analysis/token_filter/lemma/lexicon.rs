//! Built-in English base-form lexicon.
//!
//! A compact word list weighted towards the vocabulary of film reviews. Each
//! part of speech has its base forms plus an exception table for irregular
//! inflections that suffix rules cannot recover.

pub(crate) const NOUNS: &[&str] = &[
    "acting", "action", "actor", "actress", "alien", "animal", "animation", "attempt",
    "audience", "award", "baby", "battle", "beauty", "beginning", "bit", "blood", "body", "book",
    "box", "boy", "brother", "brush", "budget", "bus", "camera", "car", "cartoon", "cast",
    "character", "chase", "child", "church", "cinema", "cinematography", "city", "class",
    "classic", "comedy", "copy", "costume", "country", "crash", "crew", "critic", "cult", "dance",
    "daughter", "day", "death", "detective", "dialogue", "director", "disaster", "dish", "doctor",
    "documentary", "dog", "drama", "dream", "dvd", "effect", "effort", "emotion", "end",
    "ending", "episode", "experience", "explosion", "face", "fact", "failure", "family", "fan",
    "father", "fear", "feeling", "fight", "film", "flaw", "flick", "flop", "foot", "fox",
    "friend", "fun", "game", "genre", "ghost", "girl", "glass", "goose", "gore", "guy", "gun",
    "hand", "head", "heart", "hero", "history", "home", "hope", "horror", "horse", "hour",
    "house", "humor", "humour", "husband", "idea", "image", "job", "joke", "joy", "kid",
    "killer", "kind", "king", "knife", "lady", "language", "laugh", "leaf", "level", "lie",
    "life", "line", "location", "lot", "love", "man", "masterpiece", "match", "memory", "mess",
    "mind", "minute", "mistake", "moment", "money", "monster", "mother", "mouse", "movie",
    "murder", "music", "mystery", "name", "night", "nightmare", "novel", "person",
    "picture", "piece", "place", "plot", "point", "police", "potato", "princess", "problem",
    "production", "queen", "quality", "question", "rating", "reason", "remake", "result",
    "review", "robot", "role", "romance", "scene", "school", "score", "screen", "script",
    "sequel", "series", "set", "shot", "show", "sister", "skill", "soldier", "son", "song",
    "sound", "soundtrack", "story", "studio", "stuff", "style", "success", "surprise",
    "suspense", "tale", "talent", "taste", "teacher", "team", "television", "tension",
    "theater", "theatre", "thief", "thing", "thriller", "time", "title", "tooth", "town",
    "truth", "twist", "value", "vampire", "version", "video", "viewer", "villain", "violence",
    "voice", "war", "waste", "watch", "way", "weapon", "wife", "wish", "woman", "word", "work",
    "world", "writer", "writing", "year", "zombie",
];

pub(crate) const VERBS: &[&str] = &[
    "act", "admire", "adore", "agree", "allow", "amaze", "annoy", "answer", "appear", "argue",
    "ask", "be", "become", "begin", "believe", "bore", "bother", "break", "bring", "build",
    "buy", "call", "care", "carry", "cast", "catch", "change", "chase", "choose", "close",
    "come", "contain", "create", "criticize", "cry", "cut", "dance", "decide", "deliver",
    "depict", "deserve", "destroy", "die", "direct", "disappoint", "dislike", "do", "drink",
    "drive", "eat", "edit", "end", "enjoy", "entertain", "escape", "expect", "explain", "fail",
    "fall", "feature", "feel", "fight", "film", "find", "finish", "fix", "fly", "follow",
    "forget", "frighten", "get", "give", "go", "happen", "hate", "have", "help", "hide", "hire",
    "hit", "hold", "hope", "hurt", "impress", "improve", "include", "involve", "keep", "kill",
    "know", "laugh", "lead", "leave", "let", "lie", "like", "live", "look", "lose", "love",
    "make", "manage", "mean", "mention", "miss", "move", "need", "notice", "open", "pay",
    "plan", "play", "please", "portray", "praise", "produce", "prove", "rate", "read",
    "realize", "recommend", "release", "remember", "rent", "review", "rise", "ruin", "run",
    "save", "say", "scare", "search", "see", "seem", "sell", "shock", "shoot", "show", "sing",
    "sit", "sleep", "smile", "speak", "spend", "stand", "star", "start", "stay", "stop",
    "succeed", "suffer", "suggest", "surprise", "swim", "take", "talk", "tell", "think",
    "throw", "try", "turn", "understand", "use", "wait", "wake", "walk", "want", "waste",
    "watch", "win", "wish", "wonder", "work", "write",
];

pub(crate) const ADJECTIVES: &[&str] = &[
    "absurd", "afraid", "amazing", "amusing", "angry", "annoying", "average", "awful", "bad",
    "beautiful", "believable", "big", "bitter", "bland", "bloody", "boring", "brilliant",
    "cheap", "classic", "clever", "cold", "compelling", "complex", "confusing", "cool", "crazy",
    "creepy", "cruel", "cute", "dark", "decent", "deep", "different", "disappointing", "dull",
    "dumb", "early", "easy", "emotional", "engaging", "enjoyable", "entertaining", "entire",
    "evil", "excellent", "exciting", "expensive", "fake", "famous", "fantastic", "far", "fast",
    "favorite", "favourite", "fine", "flat", "forgettable", "free", "fresh", "full", "funny",
    "glad", "good", "gorgeous", "great", "gripping", "happy", "hard", "heavy", "high",
    "hilarious", "honest", "horrible", "hot", "huge", "incredible", "interesting", "kind",
    "lame", "large", "late", "light", "little", "long", "loud", "low", "lucky", "mad", "major",
    "mediocre", "memorable", "minor", "moving", "nasty", "negative", "new", "nice", "obvious",
    "odd", "old", "original", "outstanding", "perfect", "pointless", "poor", "popular",
    "positive", "powerful", "predictable", "pretty", "proud", "quiet", "rare", "real",
    "ridiculous", "right", "sad", "same", "scary", "serious", "shallow", "short", "sick",
    "silly", "simple", "slow", "small", "smart", "soft", "solid", "special", "strange",
    "strong", "stunning", "stupid", "subtle", "superb", "sure", "sweet", "tall", "terrible",
    "thin", "thrilling", "tiny", "touching", "true", "ugly", "unbelievable", "useless",
    "violent", "warm", "watchable", "weak", "weird", "wise", "wonderful", "worthless", "wrong",
    "young",
];

pub(crate) const ADVERBS: &[&str] = &[
    "absolutely", "actually", "almost", "already", "also", "always", "badly", "barely",
    "certainly", "completely", "definitely", "enough", "especially", "even", "ever",
    "extremely", "fairly", "finally", "hardly", "highly", "incredibly", "maybe", "nearly",
    "never", "often", "perhaps", "probably", "quite", "rarely", "rather", "really", "seldom",
    "simply", "sometimes", "soon", "still", "totally", "truly", "utterly", "well",
];

pub(crate) const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"),
    ("criteria", "criterion"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("halves", "half"),
    ("heroes", "hero"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("men", "man"),
    ("mice", "mouse"),
    ("phenomena", "phenomenon"),
    ("potatoes", "potato"),
    ("teeth", "tooth"),
    ("thieves", "thief"),
    ("wives", "wife"),
    ("wolves", "wolf"),
    ("women", "woman"),
];

pub(crate) const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("ate", "eat"),
    ("became", "become"),
    ("been", "be"),
    ("began", "begin"),
    ("begun", "begin"),
    ("being", "be"),
    ("bought", "buy"),
    ("broke", "break"),
    ("broken", "break"),
    ("brought", "bring"),
    ("built", "build"),
    ("came", "come"),
    ("carried", "carry"),
    ("caught", "catch"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("cried", "cry"),
    ("did", "do"),
    ("does", "do"),
    ("done", "do"),
    ("drank", "drink"),
    ("driven", "drive"),
    ("drove", "drive"),
    ("dying", "die"),
    ("eaten", "eat"),
    ("fallen", "fall"),
    ("fell", "fall"),
    ("felt", "feel"),
    ("flew", "fly"),
    ("fought", "fight"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("found", "find"),
    ("gave", "give"),
    ("given", "give"),
    ("gone", "go"),
    ("got", "get"),
    ("gotten", "get"),
    ("had", "have"),
    ("has", "have"),
    ("held", "hold"),
    ("hid", "hide"),
    ("hidden", "hide"),
    ("is", "be"),
    ("kept", "keep"),
    ("knew", "know"),
    ("known", "know"),
    ("led", "lead"),
    ("left", "leave"),
    ("lost", "lose"),
    ("lying", "lie"),
    ("made", "make"),
    ("meant", "mean"),
    ("paid", "pay"),
    ("ran", "run"),
    ("rose", "rise"),
    ("said", "say"),
    ("sang", "sing"),
    ("sat", "sit"),
    ("saw", "see"),
    ("seen", "see"),
    ("shot", "shoot"),
    ("slept", "sleep"),
    ("sold", "sell"),
    ("spent", "spend"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("stood", "stand"),
    ("sung", "sing"),
    ("taken", "take"),
    ("thought", "think"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("told", "tell"),
    ("took", "take"),
    ("tried", "try"),
    ("understood", "understand"),
    ("was", "be"),
    ("went", "go"),
    ("were", "be"),
    ("woke", "wake"),
    ("won", "win"),
    ("wrote", "write"),
    ("written", "write"),
];

pub(crate) const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("angrier", "angry"),
    ("angriest", "angry"),
    ("best", "good"),
    ("better", "good"),
    ("bloodier", "bloody"),
    ("bloodiest", "bloody"),
    ("crazier", "crazy"),
    ("craziest", "crazy"),
    ("creepier", "creepy"),
    ("creepiest", "creepy"),
    ("earlier", "early"),
    ("earliest", "early"),
    ("easier", "easy"),
    ("easiest", "easy"),
    ("elder", "old"),
    ("eldest", "old"),
    ("farther", "far"),
    ("farthest", "far"),
    ("funnier", "funny"),
    ("funniest", "funny"),
    ("further", "far"),
    ("furthest", "far"),
    ("happier", "happy"),
    ("happiest", "happy"),
    ("luckier", "lucky"),
    ("luckiest", "lucky"),
    ("prettier", "pretty"),
    ("prettiest", "pretty"),
    ("scarier", "scary"),
    ("scariest", "scary"),
    ("sillier", "silly"),
    ("silliest", "silly"),
    ("uglier", "ugly"),
    ("ugliest", "ugly"),
    ("worse", "bad"),
    ("worst", "bad"),
];

pub(crate) const ADVERB_EXCEPTIONS: &[(&str, &str)] = &[("best", "well"), ("better", "well")];
