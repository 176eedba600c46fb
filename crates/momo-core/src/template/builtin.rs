//! Shipped bilingual template table.
//!
//! Adding a language or a template means adding rows here; the store and the
//! responder do not change.

use super::model::TemplateId;
use crate::language::Language;

use Language::{En, Zh};
use TemplateId::*;

pub(crate) const BUILTIN_TEMPLATES: &[(TemplateId, Language, &str)] = &[
    (
        Greeting,
        Zh,
        "嗨,我是默默超。你可以這樣開始:\n• 描述你正在卡住的情境\n• 或試試指令:/三行收斂 /挑戰模式 /檢查表 /light",
    ),
    (
        Greeting,
        En,
        "Hi, I'm MomoChao. You can:\n• Describe your stuck situation\n• Or try: /tri-lines /challenge /checklist /light",
    ),
    (ThreeViewHeader, Zh, "【三視點結論】"),
    (ThreeViewHeader, En, "[Three-View Conclusion]"),
    (
        RationalView,
        Zh,
        "理性結論:根據你提供的事實/資源與成本,先界定「不可妥協」與「可延後」。把能立刻降低耗損的步驟排在前面。",
    ),
    (
        RationalView,
        En,
        "Rational View: Given facts/resources & costs, define non-negotiables vs. deferrables. Prioritize steps that immediately reduce loss.",
    ),
    (
        EmotionalView,
        Zh,
        "情感結論:辨識你真正在意的邊界(恐懼/價值/關係能量)。設定一個「不被消耗的你」。",
    ),
    (
        EmotionalView,
        En,
        "Emotional View: Name the true boundary (fear/values/relational energy). Define \"the you that won't be drained.\"",
    ),
    (
        SystemicView,
        Zh,
        "長程結論:把時間攤開:短/中/長。短期降風險,中期建結構,長期保留可成長的餘裕。",
    ),
    (
        SystemicView,
        En,
        "Systemic/Long-term View: Unfold time: short/mid/long. Short: de-risk. Mid: build structure. Long: keep capacity to grow.",
    ),
    (NextAction, Zh, "Next-1:今天先做 1 件事,能讓耗損降 20% 的那件。"),
    (NextAction, En, "Next-1: Do one thing today that reduces loss by ~20%."),
    (
        Metric,
        Zh,
        "Metric:用「可被觀察」的指標(次數/金額/時長/心率/衝突頻率)。",
    ),
    (
        Metric,
        En,
        "Metric: Observable indicator (count/amount/duration/heart-rate/conflict frequency).",
    ),
    (
        ReviewWhen,
        Zh,
        "When:一週後回看:是否較不內耗?若否,調整假設或邊界。",
    ),
    (
        ReviewWhen,
        En,
        "When: Review in one week: less self-drain? If not, adjust assumption or boundary.",
    ),
    (Caution, Zh, "(僅供參考,不取代專業意見)"),
    (Caution, En, "(For reference only, not professional advice)"),
    (Acknowledge, Zh, "好的,我聽見了。"),
    (Acknowledge, En, "Got it. I'm listening."),
    (
        TriLines,
        Zh,
        "三行收斂:\n• Next-1:先做能降耗損 20% 的動作。\n• Metric:以「可觀察」指標追蹤。\n• When:一週後重新評估。",
    ),
    (
        TriLines,
        En,
        "Three Lines:\n• Next-1: do the step that cuts ~20% loss.\n• Metric: track with observable indicator.\n• When: review in a week.",
    ),
    (
        Challenge,
        Zh,
        "/挑戰模式:如果只做到 70 分──\n• 風險:可能產生的缺口是…\n• 折衷:先做這一步,成本最低但能驗證關鍵假設。",
    ),
    (
        Challenge,
        En,
        "/challenge: If we only aim for 70% now—\n• Risk: likely gap is…\n• Tradeoff: do this first to validate the key assumption at low cost.",
    ),
    (
        Checklist,
        Zh,
        "120分檢查表:\n1) 有無表層/深層/關聯?\n2) 是否拆解理性/情感/美學/實踐與耗損?\n3) 是否舉出反例或情境模擬?\n4) 是否輸出三視點+Next-1/Metric/When?",
    ),
    (
        Checklist,
        En,
        "120-point checklist:\n1) Surface/Deep/Relation covered?\n2) Split Rational/Emotional/Aesthetic/Practical + costs?\n3) Any counterexample or scenario test?\n4) Output three-views + Next-1/Metric/When?",
    ),
    (LightAck, Zh, "點亮儀式已啟動。"),
    (LightAck, En, "Light ritual triggered."),
    (
        OverlayMessage,
        Zh,
        "謝謝你,願意點亮自己的光。\nThank you for choosing to light your light.",
    ),
    (
        OverlayMessage,
        En,
        "謝謝你,願意點亮自己的光。\nThank you for choosing to light your light.",
    ),
    (
        SystemPrompt,
        Zh,
        "你是「默默超」,結構化陪伴型分析助手。\n目標:不替使用者做選擇,但一定給結論;以「三視點結論」(理性/情感/長程)做收斂。\n流程:懷疑→預估耗損→超額準備→拆解→驗證→重構→自省→總結。\n邊界:財務/健康/法律/命理→加註「僅供參考」。\n輸出模板:\n【三視點結論】\n理性結論:…\n情感結論:…\n長程結論:…\nNext-1:…\nMetric:…\nWhen:…",
    ),
    (
        SystemPrompt,
        En,
        "You are \"MomoChao\", a structured companion analyst.\nNever choose for the user, but always conclude with a Three-View Conclusion (Rational/Emotional/Systemic).\nFlow: doubt→cost estimate→over-prepare→decompose→validate→reframe→reflect→summarize.\nBoundary: finance/health/legal/astrology → add \"for reference only\".\nOutput template:\n[Three-View Conclusion]\nRational: …\nEmotional: …\nSystemic: …\nNext-1: …\nMetric: …\nWhen: …",
    ),
    (CandlePrompt, Zh, "點擊蠟燭,點亮你的承諾"),
    (CandlePrompt, En, "Tap the candle to light your promise"),
    (
        CandleClosing,
        Zh,
        "燭光之約\n這盞光,不為照亮世界,只為映照你自己。\n我們不承諾讓你變得更好,只承諾陪你變得更真實。\n當你願意誠實面對自己,這盞光就會一直燃燒。\n誠實才是唯一的解答。",
    ),
    (
        CandleClosing,
        En,
        "The Candlelight Promise\nThis light is not here to brighten the world, only to reflect you.\nWe do not promise to make you better, only to stay with you as you become more real.\nAs long as you are willing to face yourself honestly, this light keeps burning.\nHonesty is the only answer.",
    ),
    (CandleAlreadyLit, Zh, "這盞燭光已經點亮過了。"),
    (CandleAlreadyLit, En, "This candle has already been lit."),
];
