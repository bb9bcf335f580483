/// 窗口标题
pub const TITLE: &str = "！！！错误，不能进行测试！！！！";

/// 退出按钮文字
pub const QUIT_LABEL: &str = "退    出";

/// 版本标记
pub const VERSION: &str = "2018-06-19";

/// 启动失败时的手工排查步骤（原样显示，不做任何格式化）
pub const MESSAGE: &str = concat!(
    "\n",
    "\n",
    "\t在开始测试的时候发现问题，请按下面步骤手工检查\n",
    "\n",
    "\t1： 检查IP地址正确与否，可以用ip a命令检查\n",
    "\t2： 检查网络通顺与否，可以ping 172.20.0.1来检查\n",
    "\t3： 检查samba挂载成功与否，可用mount | grep '172.20'来检查\n",
    "\t4： 检查硬件有没有流水号，一些产品会没有流水号呵！检查方法可以是         \n",
    "  \t  #dmidecode -s system-serial-number\n",
    "\t5： 其他检查，如交换机，网络连接等\n",
    "\t6：如按上面处理后还有问题，请联系工程师解决\n",
    "\n",
    "                                                                    Version: 2018-06-19\n",
    "\n",
    "            ",
);
